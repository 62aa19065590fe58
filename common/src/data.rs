// static sample content for the landing page
//
// none of this is fetched from anywhere; it is baked in at build time and
// never mutated

use serde::{Deserialize, Serialize};

pub type CabinId = u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Luxury,
    Family,
    Romantic,
    Adventure,
}

impl Category {
    pub fn all() -> [Self; 5] {
        [
            Self::All,
            Self::Luxury,
            Self::Family,
            Self::Romantic,
            Self::Adventure,
        ]
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Luxury => "luxury",
            Self::Family => "family",
            Self::Romantic => "romantic",
            Self::Adventure => "adventure",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::All => "All Cabins",
            Self::Luxury => "Luxury",
            Self::Family => "Family",
            Self::Romantic => "Romantic",
            Self::Adventure => "Adventure",
        }
    }

    // advertised listing counts, not derived from CABINS
    pub fn count(self) -> u32 {
        match self {
            Self::All => 120,
            Self::Luxury => 45,
            Self::Family => 38,
            Self::Romantic => 25,
            Self::Adventure => 32,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cabin {
    pub id: CabinId,
    pub name: &'static str,
    pub location: &'static str,
    pub price: u32,
    pub rating: f32,
    pub reviews: u32,
    pub image: &'static str,
    pub category: Category,
    pub amenities: &'static [&'static str],
    pub guests: u32,
}

impl Cabin {
    // cards only have room for a couple of badges
    pub fn amenity_preview(&self) -> &'static [&'static str] {
        let amenities = self.amenities;
        &amenities[..amenities.len().min(2)]
    }
}

pub static CABINS: &[Cabin] = &[
    Cabin {
        id: 1,
        name: "Aurora Retreat",
        location: "Aspen, Colorado",
        price: 450,
        rating: 4.9,
        reviews: 127,
        image: "/assets/Aurora-Retreat.jpg",
        category: Category::Luxury,
        amenities: &["Hot Tub", "Fireplace", "Mountain View", "WiFi"],
        guests: 8,
    },
    Cabin {
        id: 2,
        name: "Wildwood Escape",
        location: "Big Sur, California",
        price: 320,
        rating: 4.8,
        reviews: 89,
        image: "/assets/Wildwood-Escape.jpg",
        category: Category::Family,
        amenities: &["Kitchen", "Game Room", "Hiking Trails", "Pet Friendly"],
        guests: 6,
    },
    Cabin {
        id: 3,
        name: "Moonlight Cabin",
        location: "Lake Tahoe, Nevada",
        price: 280,
        rating: 4.7,
        reviews: 156,
        image: "/assets/Moonlight-Cabin.jpg",
        category: Category::Romantic,
        amenities: &["Lake View", "Private Deck", "Jacuzzi", "Stargazing"],
        guests: 2,
    },
];

// the hero card; it shares its like id with the first catalog entry
pub static FEATURED_CABIN: Cabin = Cabin {
    id: 1,
    name: "Mountain Vista Lodge",
    location: "Whistler, Canada",
    price: 380,
    rating: 4.9,
    reviews: 156,
    image: "/assets/placeholder.jpg",
    category: Category::Luxury,
    amenities: &[],
    guests: 8,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Alex Rivera",
        role: "Travel Blogger",
        content: "The most seamless booking experience I've ever had. The cabin exceeded all expectations!",
        avatar: "/assets/Alex-Rivera.jpg",
        rating: 5,
    },
    Testimonial {
        name: "Sarah Chen",
        role: "Family Traveler",
        content: "Perfect for our family vacation. Kids loved it, parents relaxed. Win-win!",
        avatar: "/assets/Sarah-Chen.jpg",
        rating: 5,
    },
    Testimonial {
        name: "Marcus Johnson",
        role: "Adventure Seeker",
        content: "Incredible location with amazing hiking trails. Will definitely book again!",
        avatar: "/assets/Marcus-Johnson.jpg",
        rating: 5,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub number: u32,
    pub label: &'static str,
    pub suffix: &'static str,
}

impl Stat {
    pub fn display(&self) -> String {
        format!("{}{}", self.number, self.suffix)
    }
}

pub static STATS: &[Stat] = &[
    Stat {
        number: 1200,
        label: "Happy Guests",
        suffix: "+",
    },
    Stat {
        number: 150,
        label: "Premium Cabins",
        suffix: "+",
    },
    Stat {
        number: 98,
        label: "Satisfaction Rate",
        suffix: "%",
    },
    Stat {
        number: 24,
        label: "Support Available",
        suffix: "/7",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Shield,
    Zap,
    Award,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub desc: &'static str,
}

pub static FEATURES: &[Feature] = &[
    Feature {
        icon: FeatureIcon::Shield,
        title: "Verified Properties",
        desc: "Every cabin is personally inspected and verified",
    },
    Feature {
        icon: FeatureIcon::Zap,
        title: "Instant Booking",
        desc: "Book instantly with our streamlined process",
    },
    Feature {
        icon: FeatureIcon::Award,
        title: "Premium Support",
        desc: "24/7 concierge service for all your needs",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct LinkSection {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub static FOOTER_SECTIONS: &[LinkSection] = &[
    LinkSection {
        title: "Explore",
        links: &["All Cabins", "Luxury", "Family", "Romantic", "Adventure"],
    },
    LinkSection {
        title: "Company",
        links: &["About Us", "Careers", "Press", "Blog", "Partners"],
    },
    LinkSection {
        title: "Support",
        links: &[
            "Help Center",
            "Safety",
            "Cancellation",
            "Contact Us",
            "Trust & Safety",
        ],
    },
];

pub static LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "Cookie Policy"];

pub const COPYRIGHT_YEAR: u16 = 2024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    // mail links stay in the current tab
    pub fn opens_new_tab(&self) -> bool {
        self.kind != ContactKind::Email
    }
}

pub static CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::GitHub,
        label: "GitHub",
        href: "https://github.com/zacktam12",
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/zekariastamiru",
    },
    ContactLink {
        kind: ContactKind::Email,
        label: "Email",
        href: "mailto:zekariastamiru12@gmail.com",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn cabin_ids_are_unique() {
        let ids: HashSet<_> = CABINS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CABINS.len());
    }

    #[test]
    fn featured_cabin_shares_first_like_id() {
        assert_eq!(FEATURED_CABIN.id, CABINS[0].id);
    }

    #[test]
    fn amenity_preview_is_capped() {
        assert_eq!(CABINS[0].amenity_preview(), &["Hot Tub", "Fireplace"]);
        assert!(FEATURED_CABIN.amenity_preview().is_empty());
    }

    #[test]
    fn three_testimonials() {
        assert_eq!(TESTIMONIALS.len(), 3);
        assert!(TESTIMONIALS.iter().all(|t| t.rating == 5));
    }

    #[test]
    fn stat_display_appends_suffix() {
        let shown: Vec<_> = STATS.iter().map(Stat::display).collect();
        assert_eq!(shown, vec!["1200+", "150+", "98%", "24/7"]);
    }

    #[test]
    fn category_ids_round_trip_through_serde() {
        for category in Category::all() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.id()));

            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }

        assert!(serde_json::from_str::<Category>("\"Luxury\"").is_err());
    }
}
