//! Business-Type Lookup Tables
//!
//! Keyword detection over extracted business info, mapped to the wardrobe
//! palette, environment description, and header color scheme the image
//! prompts embed. Each business sector gets a visually distinct treatment.

/// Business sectors with dedicated visual treatments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessKind {
    Medical,
    RealEstate,
    Fashion,
    Food,
    Tech,
    Education,
    Solar,
    Laundry,
    Mattress,
    Electrical,
    Tea,
    Jewellery,
    Default,
}

/// Detect the business sector from free-form extracted info.
pub fn detect_business_kind(info: &str) -> BusinessKind {
    let info = info.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| info.contains(k));

    if has(&["medical", "hospital", "clinic", "doctor", "physician", "health"]) {
        BusinessKind::Medical
    } else if has(&["real estate", "realty", "property", "builders", "construction"]) {
        BusinessKind::RealEstate
    } else if has(&["fashion", "boutique", "saree", "clothing", "couture", "garment"]) {
        BusinessKind::Fashion
    } else if has(&["food", "restaurant", "catering", "caterer", "hotel"]) {
        BusinessKind::Food
    } else if has(&["tech", "software", "app", "digital", "it "]) {
        BusinessKind::Tech
    } else if has(&["education", "school", "college", "study", "abroad", "consultant"]) {
        BusinessKind::Education
    } else if has(&["solar", "energy", "power", "renewable"]) {
        BusinessKind::Solar
    } else if has(&["laundry", "wash", "dry clean", "fabric care"]) {
        BusinessKind::Laundry
    } else if has(&["mattress", "sleep", "furniture", "bed"]) {
        BusinessKind::Mattress
    } else if has(&["electrical", "plumbing", "hardware", "ac ", "air conditioner", "appliance"]) {
        BusinessKind::Electrical
    } else if has(&["tea", "coffee", "beverage"]) {
        BusinessKind::Tea
    } else if has(&["jewel", "gold", "diamond"]) {
        BusinessKind::Jewellery
    } else {
        BusinessKind::Default
    }
}

impl BusinessKind {
    /// Every sector with a dedicated treatment, in guide order.
    pub const ALL: [BusinessKind; 13] = [
        Self::Medical,
        Self::RealEstate,
        Self::Fashion,
        Self::Food,
        Self::Tech,
        Self::Education,
        Self::Solar,
        Self::Laundry,
        Self::Mattress,
        Self::Electrical,
        Self::Tea,
        Self::Jewellery,
        Self::Default,
    ];

    /// Sector name as printed in the prompt guides.
    pub fn sector_name(&self) -> &'static str {
        match self {
            Self::Medical => "Medical/Healthcare",
            Self::RealEstate => "Real Estate",
            Self::Fashion => "Fashion/Boutique",
            Self::Food => "Food/Restaurant/Catering",
            Self::Tech => "Tech/Software/Agency",
            Self::Education => "Education/Consultancy",
            Self::Solar => "Solar/Energy",
            Self::Laundry => "Laundry/Wash",
            Self::Mattress => "Mattress/Furniture",
            Self::Electrical => "Electrical/Hardware",
            Self::Tea => "Tea/Beverage",
            Self::Jewellery => "Jewellery",
            Self::Default => "Default",
        }
    }

    /// Saree palette for the traditional-attire treatment.
    pub fn saree_palette(&self) -> &'static str {
        match self {
            Self::Medical => {
                "elegant neutral-beige or soft ivory base with subtle blue and warm accents \
                 symbolizing cleanliness and trust"
            }
            Self::RealEstate => {
                "deep royal blue or rich emerald green with subtle gold accents reflecting \
                 trust, stability, and prosperity"
            }
            Self::Fashion => {
                "rich royal purple or deep wine with subtle gold accents, luxury couture \
                 aesthetic"
            }
            Self::Food => {
                "warm festive colors — rich maroon, deep orange or golden yellow with \
                 traditional border"
            }
            Self::Tech => {
                "modern sophisticated tones — deep navy blue or charcoal grey with subtle \
                 silver accents"
            }
            Self::Education => {
                "sophisticated academic tones — deep blue or forest green with subtle gold \
                 accents"
            }
            Self::Solar => {
                "powerful corporate-energy palette — deep green, solar-blue, and subtle gold \
                 accents symbolizing clean energy and trust"
            }
            Self::Laundry => {
                "elegant neutral-beige or soft ivory base with subtle blue and warm orange \
                 accents symbolizing cleanliness, water, and freshness"
            }
            Self::Mattress => {
                "soft comfortable tones — cream, soft blue or lavender with subtle accents"
            }
            Self::Electrical => {
                "professional service tones — deep blue or steel grey with subtle accents"
            }
            Self::Tea => "rich leaf-green with warm golden accents inspired by tea-brand tones",
            Self::Jewellery => "rich royal maroon or deep purple with gold accents",
            Self::Default => "premium traditional colors matching the business brand palette",
        }
    }

    /// Environment the subject is photographed in.
    pub fn environment(&self) -> &'static str {
        match self {
            Self::Medical => {
                "real, operational, premium medical clinic reception area: spotless counters, \
                 soft warm-toned walls, subtle blue highlights, organized medical signage, \
                 clean waiting area visible"
            }
            Self::RealEstate => {
                "real, operational, premium real-estate office: elegant reception desk, \
                 wall-mounted project visuals, floor-plan displays or miniature building \
                 models, deep blues and warm neutrals"
            }
            Self::Fashion => {
                "real, operational, premium fashion boutique interior: elegant displays, \
                 designer clothing visible, rich textures, soft boutique lighting"
            }
            Self::Food => {
                "real, operational, premium restaurant or catering reception: warm \
                 hospitality décor, elegant setup, appetizing and welcoming ambiance"
            }
            Self::Tech => {
                "real, modern, premium tech office: clean reception-style setup with soft \
                 curves, subtle gradient elements, natural indoor lighting"
            }
            Self::Education => {
                "real, operational, premium education consultancy office: modern professional \
                 interiors, achievement displays, global study visuals"
            }
            Self::Solar => {
                "real, operational, premium solar-energy experience center: wooden and white \
                 interiors, organized displays suggesting solar panels and energy systems"
            }
            Self::Laundry => {
                "real, operational, premium laundry service reception: spotless counters, \
                 neatly arranged washing machines, folded white linens, organized racks"
            }
            Self::Mattress => {
                "real, operational, premium mattress showroom: elegant displays, comfortable \
                 sleep-focused ambiance, organized product presentation"
            }
            Self::Electrical => {
                "real, operational, professional electrical and plumbing service center: \
                 organized equipment displays, clean workspace"
            }
            Self::Tea => {
                "real, operational, premium tea distribution office: clean wooden reception \
                 counter, shelves displaying neatly arranged green and gold tea packets"
            }
            Self::Jewellery => {
                "real, operational, premium jewellery showroom: elegant display cases, \
                 luxurious ambiance, soft spotlighting on displays"
            }
            Self::Default => {
                "real, operational, premium business office or reception area: professional \
                 modern interiors appropriate to the business type, authentic and \
                 well-maintained"
            }
        }
    }

    /// Header background color scheme.
    pub fn header_palette(&self) -> &'static str {
        match self {
            Self::Medical => "premium medical gradient (deep blue to teal), trust and calm",
            Self::RealEstate => "premium luxury gradient (black with gold accents), prestige",
            Self::Fashion => "premium fashion gradient (deep plum with gold), elegant",
            Self::Food => "premium warm gradient (deep orange and gold), appetizing",
            Self::Tech => "premium modern gradient (blue to purple), innovative",
            Self::Education => "premium academic gradient (soft blue to white), trustworthy",
            Self::Solar => "premium energy gradient (green and blue tones), sustainability",
            Self::Laundry => "premium fresh gradient (warm neutrals with subtle blue)",
            Self::Mattress => "premium comfort gradient (soft blue), relaxation",
            Self::Electrical => "premium service gradient (cool blue and steel grey)",
            Self::Tea => "premium earthy gradient (green and gold tones), warmth",
            Self::Jewellery => "premium luxury gradient (deep maroon with gold), opulence",
            Self::Default => "premium corporate gradient in neutral dark tones",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_by_keyword() {
        assert_eq!(
            detect_business_kind("Sri Devi Multi-Speciality Clinic"),
            BusinessKind::Medical
        );
        assert_eq!(
            detect_business_kind("Golden Nest Builders and Property Developers"),
            BusinessKind::RealEstate
        );
        assert_eq!(
            detect_business_kind("Lakshmi Gold & Diamond Jewellers"),
            BusinessKind::Jewellery
        );
        assert_eq!(detect_business_kind("totally unrelated"), BusinessKind::Default);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(detect_business_kind("SOLAR POWER SOLUTIONS"), BusinessKind::Solar);
    }

    #[test]
    fn test_every_kind_has_tables() {
        for kind in [
            BusinessKind::Medical,
            BusinessKind::RealEstate,
            BusinessKind::Fashion,
            BusinessKind::Food,
            BusinessKind::Tech,
            BusinessKind::Education,
            BusinessKind::Solar,
            BusinessKind::Laundry,
            BusinessKind::Mattress,
            BusinessKind::Electrical,
            BusinessKind::Tea,
            BusinessKind::Jewellery,
            BusinessKind::Default,
        ] {
            assert!(!kind.saree_palette().is_empty());
            assert!(!kind.environment().is_empty());
            assert!(!kind.header_palette().is_empty());
        }
    }
}
