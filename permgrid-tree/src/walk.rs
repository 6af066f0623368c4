use permgrid_types::Resource;

/// Pre-order list of every node in the forest.
///
/// Uses an explicit stack so deep trees cannot overflow.
pub fn flatten_tree(tree: &[Resource]) -> Vec<&Resource> {
    let mut out = Vec::new();
    let mut stack: Vec<&Resource> = tree.iter().rev().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.children.iter().rev());
    }
    out
}

/// Keys of every node, pre-order.
pub fn resource_keys(tree: &[Resource]) -> Vec<String> {
    flatten_tree(tree).into_iter().map(|r| r.key.clone()).collect()
}

/// Finds the node with `key` anywhere in the forest.
pub fn find_resource<'a>(tree: &'a [Resource], key: &str) -> Option<&'a Resource> {
    flatten_tree(tree).into_iter().find(|r| r.key == key)
}

/// `key` followed by all of its descendants, pre-order.
///
/// Returns an empty list if `key` is not in the tree.
pub fn subtree_keys(tree: &[Resource], key: &str) -> Vec<String> {
    match find_resource(tree, key) {
        Some(root) => resource_keys(std::slice::from_ref(root)),
        None => Vec::new(),
    }
}
