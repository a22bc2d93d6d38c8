mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the first element whose attribute `key` equals `value`.
pub fn find_by_attr<'a>(root: &'a Element, key: &str, value: &str) -> Option<&'a Element> {
    if root.get_attr(key) == Some(value) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_by_attr(child, key, value) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect all elements whose attribute `key` equals `value`, in tree order.
pub fn find_all_by_attr<'a>(root: &'a Element, key: &str, value: &str) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_by_attr(root, key, value, &mut result);
    result
}

fn collect_by_attr<'a>(
    element: &'a Element,
    key: &str,
    value: &str,
    result: &mut Vec<&'a Element>,
) {
    if element.get_attr(key) == Some(value) {
        result.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_by_attr(child, key, value, result);
        }
    }
}

/// Collect all elements with the given `role` attribute, in tree order.
pub fn find_all_by_role<'a>(root: &'a Element, role: &str) -> Vec<&'a Element> {
    find_all_by_attr(root, "role", role)
}

/// Find the first element whose accessible label (`aria-label`) equals `label`.
pub fn find_by_label<'a>(root: &'a Element, label: &str) -> Option<&'a Element> {
    find_by_attr(root, "aria-label", label)
}

/// Find the first text node whose content equals `text`.
pub fn find_by_text<'a>(root: &'a Element, text: &str) -> Option<&'a Element> {
    if root.text_content() == Some(text) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_by_text(child, text) {
                return Some(found);
            }
        }
    }

    None
}
