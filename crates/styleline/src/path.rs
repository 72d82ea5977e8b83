//! Ancestor path lookup in the instance tree.

use styleline_model::{Child, Instance, InstanceId};

/// Collects the chain of ancestors of `target`, root first, immediate
/// parent last. The target itself is not included.
///
/// Returns an empty path when `target` is the root's own id (a node has no
/// ancestors of itself) and when `target` occurs nowhere in the tree;
/// neither case is an error.
///
/// The walk is an explicit-stack depth-first traversal, so arbitrarily deep
/// trees cannot overflow the call stack. Children are scanned in order and
/// text leaves are skipped. For a well-formed tree (unique ids) there is
/// exactly one path and it is returned regardless of where the target sits
/// among its siblings. If ids are duplicated (a precondition violation the
/// tree layer does not police), the first matching branch in document order
/// wins.
///
/// # Example
///
/// ```rust
/// use styleline::ancestor_path;
/// use styleline_model::{Instance, InstanceId};
///
/// let tree = Instance::new("root")
///     .with_child(Instance::new("mid").with_child(Instance::new("leaf")));
///
/// let path = ancestor_path(&tree, &InstanceId::new("leaf"));
/// let ids: Vec<_> = path.iter().map(|a| a.id.as_str()).collect();
/// assert_eq!(ids, ["root", "mid"]);
/// ```
pub fn ancestor_path<'a>(root: &'a Instance, target: &InstanceId) -> Vec<&'a Instance> {
    if root.id == *target {
        return Vec::new();
    }

    // Each frame is a node we are inside of plus its remaining children;
    // the frame stack is the ancestor chain of whatever we visit next.
    let mut stack: Vec<(&'a Instance, std::slice::Iter<'a, Child>)> =
        vec![(root, root.children.iter())];

    loop {
        let next = match stack.last_mut() {
            Some((_, children)) => children.next(),
            None => return Vec::new(),
        };

        match next {
            Some(Child::Text(_)) => {}
            Some(Child::Instance(child)) => {
                if child.id == *target {
                    return stack.iter().map(|(ancestor, _)| *ancestor).collect();
                }
                stack.push((child, child.children.iter()));
            }
            None => {
                stack.pop();
            }
        }
    }
}
