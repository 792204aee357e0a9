use serde::Serialize;

use crate::models::country::Country;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavItem {
    pub country_id: String,
    pub href: String,
    pub emoji: String,
    pub name: String,
    pub active: bool,
}

/// One nav link per country. With an `active` country id, exactly the
/// matching link is marked; without one, none are.
pub fn nav_items(countries: &[Country], active: Option<&str>) -> Vec<NavItem> {
    countries
        .iter()
        .map(|c| NavItem {
            country_id: c.id.clone(),
            href: c.href(),
            emoji: c.emoji.clone(),
            name: c.name.clone(),
            active: active == Some(c.id.as_str()),
        })
        .collect()
}

/// Open/closed state of the mobile nav menu.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn class(&self) -> &'static str {
        if self.open {
            "nav-menu open"
        } else {
            "nav-menu"
        }
    }
}

/// Back-to-top button; shown once the page scrolls past `threshold` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackToTop {
    pub threshold: u32,
}

/// Browser-side behaviour for the chrome. The toggle flips the `open` class
/// that `MenuState::class` renders, any click outside `.main-nav` removes it,
/// and the back-to-top button reads its `data-threshold`.
pub const CHROME_JS: &str = r#"
(function() {
    var toggle = document.getElementById('navToggle');
    var menu = document.getElementById('navMenu');
    if (toggle && menu) {
        toggle.addEventListener('click', function() {
            menu.classList.toggle('open');
        });
        document.addEventListener('click', function(e) {
            if (!e.target.closest('.main-nav')) {
                menu.classList.remove('open');
            }
        });
    }

    var top = document.getElementById('backToTop');
    if (top) {
        var threshold = parseInt(top.dataset.threshold, 10) || 400;
        window.addEventListener('scroll', function() {
            top.classList.toggle('visible', window.scrollY > threshold);
        });
        top.addEventListener('click', function() {
            window.scrollTo({ top: 0, behavior: 'smooth' });
        });
    }
})();
"#;
