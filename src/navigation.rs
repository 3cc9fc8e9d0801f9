//! Screen stack for the gallery and the photo details page.

use std::sync::Arc;

use thiserror::Error;

use crate::photo::PhotoRecord;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Home,
    PhotoDetail,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::PhotoDetail => "PhotoDetail",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Home,
    PhotoDetail(Arc<PhotoRecord>),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::PhotoDetail(_) => Route::PhotoDetail,
        }
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum NavigationError {
    #[error("route {0} requires a photo")]
    MissingPayload(&'static str),
}

/// A stack of screens with `Home` always at the bottom.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Home],
        }
    }

    pub fn current(&self) -> &Screen {
        // The root is never popped.
        self.stack.last().unwrap_or(&Screen::Home)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push_detail(&mut self, photo: Arc<PhotoRecord>) {
        log::debug!("navigate to {} for photo {}", Route::PhotoDetail.name(), photo.id);
        self.stack.push(Screen::PhotoDetail(photo));
    }

    /// Returns `false` when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// A details route without a photo is rejected and the current screen is kept.
    pub fn navigate(
        &mut self,
        route: Route,
        payload: Option<Arc<PhotoRecord>>,
    ) -> Result<(), NavigationError> {
        match route {
            Route::Home => {
                self.stack.truncate(1);
                Ok(())
            }
            Route::PhotoDetail => match payload {
                Some(photo) => {
                    self.push_detail(photo);
                    Ok(())
                }
                None => Err(NavigationError::MissingPayload(route.name())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::fallback;

    fn photo(index: usize) -> Arc<PhotoRecord> {
        Arc::new(fallback::photos().remove(index))
    }

    #[test]
    fn starts_at_home() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current(), &Screen::Home);
        assert_eq!(navigator.depth(), 1);
    }

    #[test]
    fn push_and_back() {
        let mut navigator = Navigator::new();
        let selected = photo(1);
        navigator.push_detail(selected.clone());

        match navigator.current() {
            Screen::PhotoDetail(shown) => assert!(Arc::ptr_eq(shown, &selected)),
            other => panic!("unexpected screen {:?}", other),
        }

        assert!(navigator.back());
        assert_eq!(navigator.current(), &Screen::Home);
        assert!(!navigator.back());
        assert_eq!(navigator.depth(), 1);
    }

    #[test]
    fn navigate_by_route() {
        let mut navigator = Navigator::new();
        navigator.navigate(Route::PhotoDetail, Some(photo(0))).unwrap();
        assert_eq!(navigator.current().route(), Route::PhotoDetail);

        navigator.navigate(Route::Home, None).unwrap();
        assert_eq!(navigator.current(), &Screen::Home);
        assert_eq!(navigator.depth(), 1);
    }

    #[test]
    fn detail_without_photo_is_rejected() {
        let mut navigator = Navigator::new();
        assert_eq!(
            navigator.navigate(Route::PhotoDetail, None),
            Err(NavigationError::MissingPayload("PhotoDetail"))
        );
        assert_eq!(navigator.current(), &Screen::Home);
    }
}
