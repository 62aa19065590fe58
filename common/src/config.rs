use crate::data::{CONTACT_LINKS, ContactLink};

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    // shown in the nav bar, footer and page title
    pub brand_name: &'static str,

    pub tagline: &'static str,

    // localStorage key for the dark-mode flag
    //
    // this is deliberately not prefixed so that it matches what earlier
    // versions of the page wrote
    pub theme_storage_key: &'static str,

    // period of the testimonial carousel, in milliseconds
    pub carousel_interval_ms: u32,

    // how far the hero layers travel over a full page scroll, in percent
    pub hero_background_travel: f64,
    pub hero_text_travel: f64,

    // fraction of the stats section that must be on screen before it reveals
    pub stats_reveal_threshold: f64,

    // same, for the headings, cards and copy blocks further down the page
    pub section_reveal_threshold: f64,

    pub contact_links: &'static [ContactLink],
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            brand_name: "StayTrack",
            tagline: "Your Perfect Cabin Getaway",
            theme_storage_key: "isDarkMode",
            carousel_interval_ms: 4000,
            hero_background_travel: 100.0,
            hero_text_travel: 50.0,
            stats_reveal_threshold: 0.2,
            section_reveal_threshold: 0.1,
            contact_links: CONTACT_LINKS,
        }
    }
}

impl SiteConfig {
    pub fn page_title(&self) -> String {
        format!("{} - {}", self.brand_name, self.tagline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_page() {
        let config = SiteConfig::default();

        assert_eq!(config.theme_storage_key, "isDarkMode");
        assert_eq!(config.carousel_interval_ms, 4000);
        assert!(config.section_reveal_threshold > 0.0);
        assert!(config.section_reveal_threshold <= config.stats_reveal_threshold);
        assert_eq!(config.page_title(), "StayTrack - Your Perfect Cabin Getaway");
    }
}
