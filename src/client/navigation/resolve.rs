use crate::client::navigation::{
    path::{normalize, segments},
    table::{RouteNode, RouteTable, Target},
};

/// Result of matching a location against the route table.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<P> {
    /// A page matched. `layouts` lists the enclosing shells, outermost first.
    Page {
        path: String,
        page: P,
        layouts: Vec<P>,
        guarded: bool,
    },
    /// A redirect entry matched; it must be followed with a history replace.
    ///
    /// A guarded redirect only fires once the route guard lets `from` through.
    Redirect {
        from: String,
        to: String,
        layouts: Vec<P>,
        guarded: bool,
    },
    NotFound { path: String },
}

impl<P: Clone> RouteTable<P> {
    /// Maps a location to exactly one render target.
    ///
    /// Walks the tree depth first, preferring literal children over the index
    /// entry of a scope. The index entry only matches when no segment remains.
    pub fn resolve(&self, location: &str) -> Resolution<P> {
        let path = normalize(location);
        let segments = segments(&path);

        let mut layouts = Vec::new();
        let Some(node) = find(&self.roots, &segments, &mut layouts) else {
            return Resolution::NotFound { path };
        };

        match &node.target {
            Target::Page(page) => Resolution::Page {
                path,
                page: page.clone(),
                layouts: layouts.into_iter().cloned().collect(),
                guarded: node.guarded,
            },
            Target::Redirect(to) => Resolution::Redirect {
                from: path,
                to: to.clone(),
                layouts: layouts.into_iter().cloned().collect(),
                guarded: node.guarded,
            },
            // `find` never returns a layout node
            Target::Layout(_) => Resolution::NotFound { path },
        }
    }
}

impl<P> RouteTable<P> {
    /// Finds the page or redirect node serving `location`, if any.
    pub(crate) fn lookup(&self, location: &str) -> Option<&RouteNode<P>> {
        let path = normalize(location);
        find(&self.roots, &segments(&path), &mut Vec::new())
    }
}

fn find<'a, P>(
    nodes: &'a [RouteNode<P>],
    rest: &[&str],
    layouts: &mut Vec<&'a P>,
) -> Option<&'a RouteNode<P>> {
    for node in nodes.iter().filter(|node| !node.index) {
        let Some(remaining) = strip(rest, &node.segments) else {
            continue;
        };

        match &node.target {
            Target::Layout(shell) => {
                layouts.push(shell);
                if let Some(found) = find(&node.children, remaining, layouts) {
                    return Some(found);
                }
                layouts.pop();
            }
            _ if remaining.is_empty() => return Some(node),
            _ => {}
        }
    }

    if rest.is_empty() {
        nodes.iter().find(|node| node.index)
    } else {
        None
    }
}

fn strip<'r, 's>(rest: &'r [&'s str], prefix: &[String]) -> Option<&'r [&'s str]> {
    if rest.len() < prefix.len() {
        return None;
    }

    let (head, tail) = rest.split_at(prefix.len());
    head.iter()
        .zip(prefix)
        .all(|(segment, expected)| *segment == expected.as_str())
        .then_some(tail)
}
