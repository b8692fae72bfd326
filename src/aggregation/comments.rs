//! Comment thread reconstruction: batch fetch, display-name resolution,
//! and per-menu forest building.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use super::MenuAggregator;
use crate::errors::AppError;
use crate::models::{CommentNode, MenuComment};

impl MenuAggregator {
    /// Fetch and reconstruct the comment trees for a set of menus.
    /// If the user directory is unreachable, names fall back to raw ids
    /// rather than failing the whole aggregation.
    pub(super) async fn comment_trees(
        &self,
        menu_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<CommentNode>>, AppError> {
        if menu_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let docs = self.comments.find_by_menu_ids(menu_ids).await?;
        if docs.is_empty() {
            return Ok(HashMap::new());
        }

        let user_ids: Vec<Uuid> = {
            let mut seen = HashSet::new();
            docs.iter()
                .map(|d| d.user_id)
                .filter(|id| seen.insert(*id))
                .collect()
        };

        let names = match self.users.display_names(&user_ids).await {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("User lookup failed, falling back to raw ids: {e}");
                HashMap::new()
            }
        };

        let mut grouped: HashMap<Uuid, Vec<MenuComment>> = HashMap::new();
        for doc in docs {
            grouped.entry(doc.menu_id).or_default().push(doc);
        }

        Ok(grouped
            .into_iter()
            .map(|(menu_id, docs)| (menu_id, build_forest(docs, &names)))
            .collect())
    }
}

/// Build the reply forest for one menu's comments (already in creation
/// order). A comment with no parent is a root; one whose parent is in the
/// batch nests under it; one whose parent is missing is promoted to a root
/// rather than dropped.
fn build_forest(docs: Vec<MenuComment>, names: &HashMap<Uuid, String>) -> Vec<CommentNode> {
    let in_batch: HashSet<Uuid> = docs.iter().map(|d| d.id).collect();

    let mut children: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    let mut roots: Vec<Uuid> = Vec::new();

    for doc in &docs {
        match doc.parent_id {
            Some(parent) if parent != doc.id && in_batch.contains(&parent) => {
                children.entry(parent).or_default().push(doc.id);
            }
            _ => roots.push(doc.id),
        }
    }

    let mut nodes: HashMap<Uuid, CommentNode> = docs
        .into_iter()
        .map(|doc| {
            let node = CommentNode {
                id: doc.id,
                user: names
                    .get(&doc.user_id)
                    .cloned()
                    .unwrap_or_else(|| doc.user_id.to_string()),
                text: doc.text,
                replies: Vec::new(),
                created_at: doc.created_at,
            };
            (doc.id, node)
        })
        .collect();

    roots
        .iter()
        .filter_map(|id| take_subtree(*id, &mut nodes, &children))
        .collect()
}

// Moves each node out of the map exactly once, so a malformed parent cycle
// terminates instead of recursing forever.
fn take_subtree(
    id: Uuid,
    nodes: &mut HashMap<Uuid, CommentNode>,
    children: &HashMap<Uuid, Vec<Uuid>>,
) -> Option<CommentNode> {
    let mut node = nodes.remove(&id)?;

    if let Some(kids) = children.get(&id) {
        node.replies = kids
            .iter()
            .filter_map(|kid| take_subtree(*kid, nodes, children))
            .collect();
    }

    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn comment(id: Uuid, parent_id: Option<Uuid>, text: &str, offset_secs: i64) -> MenuComment {
        MenuComment {
            id,
            menu_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            text: text.into(),
            parent_id,
            created_at: Utc::now() + Duration::seconds(offset_secs),
        }
    }

    #[test]
    fn top_level_comments_become_roots_in_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let docs = vec![comment(a, None, "first", 0), comment(b, None, "second", 1)];

        let forest = build_forest(docs, &HashMap::new());

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].text, "first");
        assert_eq!(forest[1].text, "second");
        assert!(forest.iter().all(|n| n.replies.is_empty()));
    }

    #[test]
    fn replies_nest_under_their_parent() {
        let root = Uuid::new_v4();
        let reply = Uuid::new_v4();
        let docs = vec![
            comment(root, None, "root", 0),
            comment(reply, Some(root), "reply", 1),
        ];

        let forest = build_forest(docs, &HashMap::new());

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].replies.len(), 1);
        assert_eq!(forest[0].replies[0].text, "reply");
    }

    #[test]
    fn reply_chains_nest_under_their_ancestors() {
        let root = Uuid::new_v4();
        let child = Uuid::new_v4();
        let grandchild = Uuid::new_v4();
        let docs = vec![
            comment(root, None, "root", 0),
            comment(child, Some(root), "child", 1),
            comment(grandchild, Some(child), "grandchild", 2),
        ];

        let forest = build_forest(docs, &HashMap::new());

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].replies.len(), 1);
        assert_eq!(forest[0].replies[0].replies.len(), 1);
        assert_eq!(forest[0].replies[0].replies[0].text, "grandchild");
    }

    #[test]
    fn orphaned_reply_is_promoted_to_root() {
        let reply = Uuid::new_v4();
        let docs = vec![comment(reply, Some(Uuid::new_v4()), "orphan", 0)];

        let forest = build_forest(docs, &HashMap::new());

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].text, "orphan");
        assert!(forest[0].replies.is_empty());
    }

    #[test]
    fn unresolvable_user_falls_back_to_raw_id() {
        let id = Uuid::new_v4();
        let doc = comment(id, None, "hi", 0);
        let user_id = doc.user_id;

        let forest = build_forest(vec![doc], &HashMap::new());
        assert_eq!(forest[0].user, user_id.to_string());
    }

    #[test]
    fn resolved_user_name_is_used() {
        let id = Uuid::new_v4();
        let doc = comment(id, None, "hi", 0);
        let names = HashMap::from([(doc.user_id, "Nimal".to_string())]);

        let forest = build_forest(vec![doc], &names);
        assert_eq!(forest[0].user, "Nimal");
    }
}
