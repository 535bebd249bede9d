use crate::error::{Result, SiteError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Following a mobile nav link only ever closes the menu.
    pub fn after_link_click(self) -> Self {
        if self.open {
            self.toggled()
        } else {
            self
        }
    }

    pub fn active_class(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }

    /// Body `overflow` value: the page behind an open menu must not scroll.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

pub fn lock_body_scroll(menu: MenuState) -> Result<()> {
    let body = web_sys::window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)?
        .body()
        .ok_or(SiteError::NoDocument)?;
    body.style()
        .set_property("overflow", menu.body_overflow())
        .map_err(|e| SiteError::js("style.setProperty", e))
}
