//! Detail overlay state: which photo, if any, is shown enlarged.

use crate::types::{ImageSize, Photo};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Open(Photo),
}

impl Overlay {
    pub fn open(&mut self, photo: Photo) {
        *self = Overlay::Open(photo);
    }

    /// Close and clear the selection.
    pub fn close(&mut self) {
        *self = Overlay::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open(_))
    }

    pub fn selected(&self) -> Option<&Photo> {
        match self {
            Overlay::Open(photo) => Some(photo),
            Overlay::Closed => None,
        }
    }

    /// Dialog title; `"Untitled"` for photos without one.
    pub fn title(&self) -> Option<&str> {
        self.selected().map(Photo::display_title)
    }

    pub fn description(&self) -> Option<&str> {
        self.selected().map(Photo::description_text)
    }

    pub fn image_url(&self) -> Option<String> {
        self.selected().map(|p| p.image_url(ImageSize::DETAIL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(title: &str) -> Photo {
        Photo {
            id: "42".into(),
            owner: None,
            secret: "cafe".into(),
            server: "7".into(),
            farm: 3,
            title: title.into(),
            description: None,
        }
    }

    #[test]
    fn open_then_close_clears_selection() {
        let mut o = Overlay::default();
        assert!(!o.is_open());
        o.open(photo("Gull"));
        assert!(o.is_open());
        assert_eq!(o.title(), Some("Gull"));
        o.close();
        assert_eq!(o.selected(), None);
    }

    #[test]
    fn untitled_photo_and_detail_url() {
        let mut o = Overlay::default();
        o.open(photo(""));
        assert_eq!(o.title(), Some("Untitled"));
        assert_eq!(o.description(), Some(""));
        assert_eq!(
            o.image_url().as_deref(),
            Some("https://farm3.staticflickr.com/7/42_cafe_z.jpg")
        );
    }
}
