use std::collections::HashSet;

use crate::client::navigation::{
    error::RouteTableError,
    path::{join, normalize, parse_definition},
};

/// Where a route definition sits inside its parent scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePath {
    /// Matches the parent path with no additional segment.
    Index,
    /// Literal path, either absolute (`/about`) or relative to the parent (`about`).
    Literal(String),
}

/// What a route definition renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<P> {
    Page(P),
    /// History-replace redirect to an absolute path.
    Redirect(String),
    /// Persistent chrome around the matched child.
    Layout { shell: P, children: Vec<RouteDef<P>> },
}

/// A route as declared by the application, before validation.
///
/// `P` is an opaque handle to something renderable; the table never looks
/// inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDef<P> {
    pub path: RoutePath,
    pub element: Element<P>,
    pub guarded: bool,
}

impl<P> RouteDef<P> {
    pub fn page(path: impl Into<String>, page: P) -> Self {
        Self::new(RoutePath::Literal(path.into()), Element::Page(page))
    }

    pub fn index(page: P) -> Self {
        Self::new(RoutePath::Index, Element::Page(page))
    }

    pub fn index_redirect(to: impl Into<String>) -> Self {
        Self::new(RoutePath::Index, Element::Redirect(to.into()))
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(RoutePath::Literal(path.into()), Element::Redirect(to.into()))
    }

    pub fn layout(path: impl Into<String>, shell: P, children: Vec<RouteDef<P>>) -> Self {
        Self::new(
            RoutePath::Literal(path.into()),
            Element::Layout { shell, children },
        )
    }

    /// Requires the route guard to pass before this route, or any route below
    /// it, renders.
    pub fn guarded(mut self) -> Self {
        self.guarded = true;
        self
    }

    fn new(path: RoutePath, element: Element<P>) -> Self {
        Self {
            path,
            element,
            guarded: false,
        }
    }
}

/// Validated render target of a route node.
#[derive(Debug, Clone, PartialEq)]
pub enum Target<P> {
    Page(P),
    Redirect(String),
    Layout(P),
}

#[derive(Debug, Clone)]
pub(crate) struct RouteNode<P> {
    /// Segments relative to the parent scope; empty for index entries.
    pub(crate) segments: Vec<String>,
    pub(crate) index: bool,
    pub(crate) full_path: String,
    pub(crate) target: Target<P>,
    /// Own flag or inherited from a guarded ancestor.
    pub(crate) guarded: bool,
    pub(crate) children: Vec<RouteNode<P>>,
}

/// A render target listed by [`RouteTable::entries`].
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry<'a, P> {
    pub path: &'a str,
    pub target: &'a Target<P>,
    pub guarded: bool,
}

/// Immutable, validated route tree.
///
/// Built once at startup from the application's [`RouteDef`]s. Construction
/// fails on duplicate index entries, colliding paths and malformed paths. Every
/// redirect chain must end on a page, so following redirects always terminates.
#[derive(Debug, Clone)]
pub struct RouteTable<P> {
    pub(crate) roots: Vec<RouteNode<P>>,
}

impl<P> RouteTable<P> {
    pub fn new(routes: Vec<RouteDef<P>>) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        let roots = compile(routes, &[], false, &mut seen)?;

        let table = Self { roots };
        table.check_redirects()?;

        Ok(table)
    }

    /// Lists every page and redirect in declaration order, depth first.
    pub fn entries(&self) -> Vec<RouteEntry<'_, P>> {
        let mut entries = Vec::new();
        collect(&self.roots, &mut entries);
        entries
    }

    fn check_redirects(&self) -> Result<(), RouteTableError> {
        for entry in self.entries() {
            let Target::Redirect(to) = entry.target else {
                continue;
            };

            let mut visited = HashSet::from([entry.path.to_string()]);
            let mut from = entry.path;
            let mut next = to.as_str();

            loop {
                let Some(node) = self.lookup(next) else {
                    return Err(RouteTableError::DanglingRedirect {
                        from: from.to_string(),
                        to: next.to_string(),
                    });
                };
                let Target::Redirect(target) = &node.target else {
                    break;
                };
                if !visited.insert(node.full_path.clone()) {
                    return Err(RouteTableError::RedirectCycle(entry.path.to_string()));
                }
                from = node.full_path.as_str();
                next = target.as_str();
            }
        }

        Ok(())
    }
}

fn collect<'a, P>(nodes: &'a [RouteNode<P>], entries: &mut Vec<RouteEntry<'a, P>>) {
    for node in nodes {
        match &node.target {
            Target::Layout(_) => collect(&node.children, entries),
            target => entries.push(RouteEntry {
                path: &node.full_path,
                target,
                guarded: node.guarded,
            }),
        }
    }
}

fn compile<P>(
    routes: Vec<RouteDef<P>>,
    parent: &[String],
    parent_guarded: bool,
    seen: &mut HashSet<String>,
) -> Result<Vec<RouteNode<P>>, RouteTableError> {
    let scope = join(parent);
    let mut has_index = false;
    let mut nodes = Vec::with_capacity(routes.len());

    for route in routes {
        let guarded = parent_guarded || route.guarded;

        let (index, segments) = match &route.path {
            RoutePath::Index => {
                if has_index {
                    return Err(RouteTableError::DuplicateIndex(scope));
                }
                has_index = true;
                (true, Vec::new())
            }
            RoutePath::Literal(path) => (false, relative_segments(path, parent, &scope)?),
        };

        let mut full = parent.to_vec();
        full.extend(segments.iter().cloned());
        let full_path = join(&full);

        let (target, children) = match route.element {
            Element::Layout { .. } if index => {
                return Err(RouteTableError::IndexLayout(scope));
            }
            Element::Layout { shell, children } => (
                Target::Layout(shell),
                compile(children, &full, guarded, seen)?,
            ),
            Element::Page(page) => {
                claim(seen, &full_path)?;
                (Target::Page(page), Vec::new())
            }
            Element::Redirect(to) => {
                if !to.starts_with('/') {
                    return Err(RouteTableError::InvalidRedirect {
                        from: full_path,
                        to,
                    });
                }
                claim(seen, &full_path)?;
                (Target::Redirect(normalize(&to)), Vec::new())
            }
        };

        nodes.push(RouteNode {
            segments,
            index,
            full_path,
            target,
            guarded,
            children,
        });
    }

    Ok(nodes)
}

fn relative_segments(
    path: &str,
    parent: &[String],
    scope: &str,
) -> Result<Vec<String>, RouteTableError> {
    let (absolute, segments) =
        parse_definition(path).ok_or_else(|| RouteTableError::InvalidPath(path.to_string()))?;

    if !absolute {
        return Ok(segments);
    }

    match segments.strip_prefix(parent) {
        Some(rest) => Ok(rest.to_vec()),
        None => Err(RouteTableError::OutsideParent {
            path: path.to_string(),
            parent: scope.to_string(),
        }),
    }
}

fn claim(seen: &mut HashSet<String>, full_path: &str) -> Result<(), RouteTableError> {
    if seen.insert(full_path.to_string()) {
        Ok(())
    } else {
        Err(RouteTableError::PathCollision(full_path.to_string()))
    }
}
