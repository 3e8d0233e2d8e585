//! Success Banner
//!
//! Every show hands out a token; only the newest token may hide the banner,
//! so an older timer firing late cannot cut a newer message short.

/// How long the banner stays up after a success
pub const BANNER_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessKind {
    Added,
    Updated,
}

/// Identifies one show event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    visible: bool,
    generation: u64,
    kind: Option<SuccessKind>,
}

impl Banner {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            Some(SuccessKind::Updated) => "Dog updated successfully!",
            _ => "Dog added successfully!",
        }
    }

    pub fn show(&mut self, kind: SuccessKind) -> BannerToken {
        self.generation += 1;
        self.visible = true;
        self.kind = Some(kind);
        BannerToken(self.generation)
    }

    /// Hide if `token` belongs to the latest show. Returns whether it hid.
    pub fn expire(&mut self, token: BannerToken) -> bool {
        if token.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}
