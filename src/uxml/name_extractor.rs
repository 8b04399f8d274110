use super::element_tree::ElementNode;

/// Collect element names with a pre-order depth-first walk: an element comes
/// before its children, children in document order. Elements without a name
/// or with an empty one are skipped, duplicates are kept.
pub fn extract_element_names(root: &ElementNode) -> Vec<String> {
    let mut names = Vec::new();
    collect_names(root, &mut names);
    names
}

fn collect_names(element: &ElementNode, names: &mut Vec<String>) {
    if !element.is_visual() {
        return;
    }

    if let Some(name) = element.name.as_deref().filter(|name| !name.is_empty()) {
        names.push(name.to_string());
    }

    for child in &element.children {
        collect_names(child, names);
    }
}
