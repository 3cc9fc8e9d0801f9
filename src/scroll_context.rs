use crate::navigation::Route;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScrollContext {
    Gallery,
    Details,
}

impl ScrollContext {
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Home => Self::Gallery,
            Route::PhotoDetail => Self::Details,
        }
    }

    pub fn unused_contexts(&self) -> &'static [ScrollContext] {
        // Contexts that can be safely removed when another is active
        match self {
            Self::Gallery => &[Self::Details],
            Self::Details => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_details_forgets_its_offset() {
        assert_eq!(
            ScrollContext::for_route(Route::Home).unused_contexts(),
            &[ScrollContext::Details]
        );
        assert!(
            ScrollContext::for_route(Route::PhotoDetail)
                .unused_contexts()
                .is_empty()
        );
    }
}
