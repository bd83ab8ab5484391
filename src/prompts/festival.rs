//! Festival Theme Tables
//!
//! Per-festival visual treatments blended into the image prompts when the
//! campaign is festival-flavored. Unrecognized festival names fall back to a
//! generic celebration treatment rather than failing.

/// Visual treatment for one festival.
#[derive(Debug, Clone, Copy)]
pub struct FestivalTheme {
    pub saree: &'static str,
    pub jewellery: &'static str,
    pub decorations: &'static str,
    pub floor_decor: &'static str,
    pub cultural_elements: &'static str,
    pub lighting: &'static str,
    pub header_palette: &'static str,
    pub mood: &'static str,
}

const CELEBRITY_JEWELLERY: &str =
    "luxurious celebrity-level jewellery: heavy multi-layered gold necklace with \
     diamond/kundan pendant, ornate gold jhumka earrings, gold bangle stacks on both wrists. \
     Red-carpet expensive, pure gold and diamonds only, never festival-themed trinkets";

/// Resolve the theme for a festival name, matching loosely on common
/// spellings. Unknown names get the generic celebration theme.
pub fn festival_theme(name: &str) -> FestivalTheme {
    let name = name.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

    if has(&["shivaratri", "shivratri", "shiva"]) {
        FestivalTheme {
            saree: "elegant white/cream silk saree with royal blue/violet border and silver \
                    zari work, Banarasi or Kanchipuram style, symbolizing purity and devotion",
            jewellery: CELEBRITY_JEWELLERY,
            decorations: "large Lord Shiva portrait adorned with fresh flowers, Shiva Lingam \
                          with bilva leaves on a decorated altar, marigold garlands in orange \
                          and yellow, white jasmine strings hanging in layers, multiple lit \
                          brass oil lamps at different levels",
            floor_decor: "white and blue rangoli with diya clusters at its corners",
            cultural_elements: "Shiva Lingam, bilva leaves, brass lamps, vibhuti patterns",
            lighting: "warm lamp-lit glow layered over soft interior light",
            header_palette: "deep violet to midnight blue with silver accents",
            mood: "devotional, serene, spiritually charged yet celebratory",
        }
    } else if has(&["sankranti", "pongal"]) {
        FestivalTheme {
            saree: "bright festive silk saree in turmeric yellow or parrot green with rich \
                    red border and gold zari, harvest-celebration styling",
            jewellery: CELEBRITY_JEWELLERY,
            decorations: "decorated pongal pots, sugarcane stalks leaning by the walls, \
                          marigold garlands, mango leaf torans over doorways, kites visible \
                          as accents",
            floor_decor: "large colorful muggu/rangoli with rice-flour patterns and \
                          gobbemma mounds",
            cultural_elements: "pongal pot, sugarcane, kites, mango leaf torans",
            lighting: "bright morning sunlight feel, warm and optimistic",
            header_palette: "turmeric yellow to deep red with gold accents",
            mood: "abundant, joyful, rooted in harvest tradition",
        }
    } else if has(&["diwali", "deepavali"]) {
        FestivalTheme {
            saree: "rich jewel-toned silk saree in deep red, magenta or royal blue with \
                    heavy gold zari border, grand festive styling",
            jewellery: CELEBRITY_JEWELLERY,
            decorations: "rows of lit clay diyas on every surface, marigold and jasmine \
                          garlands, hanging lanterns, gift boxes and sweets arranged \
                          elegantly",
            floor_decor: "intricate multicolor rangoli ringed with glowing diyas",
            cultural_elements: "diyas, lanterns, rangoli, festive sweets",
            lighting: "golden diya glow with soft warm bokeh in the background",
            header_palette: "deep maroon to gold, rich and luminous",
            mood: "triumphant, warm, prosperity-filled celebration",
        }
    } else if has(&["ugadi", "gudi padwa", "new year"]) {
        FestivalTheme {
            saree: "fresh spring silk saree in leaf green or bright yellow with \
                    contrasting traditional border",
            jewellery: CELEBRITY_JEWELLERY,
            decorations: "mango leaf torans, neem and jaggery arrangement on a brass \
                          plate, fresh flower garlands, festive kalash with coconut",
            floor_decor: "fresh white rangoli with green and yellow accents",
            cultural_elements: "mango leaves, ugadi pachadi plate, kalash",
            lighting: "fresh daylight, clean and optimistic",
            header_palette: "leaf green to warm yellow with gold accents",
            mood: "fresh beginnings, optimism, renewal",
        }
    } else if has(&["dussehra", "dasara", "navratri", "durga"]) {
        FestivalTheme {
            saree: "regal silk saree in deep red or royal orange with heavy gold work, \
                    goddess-festival grandeur",
            jewellery: CELEBRITY_JEWELLERY,
            decorations: "decorated goddess Durga portrait with flower garlands, banana \
                          stalks framing the scene, marigold strings, ceremonial lamps",
            floor_decor: "bold red and yellow rangoli with lamp borders",
            cultural_elements: "goddess imagery, banana stalks, marigolds, lamps",
            lighting: "dramatic warm ceremonial lighting",
            header_palette: "royal red to saffron with gold accents",
            mood: "victorious, powerful, reverent celebration",
        }
    } else if has(&["christmas"]) {
        FestivalTheme {
            saree: "elegant deep red or emerald silk saree with subtle gold shimmer, \
                    festive winter styling",
            jewellery: CELEBRITY_JEWELLERY,
            decorations: "decorated Christmas tree with warm fairy lights, wrapped gifts, \
                          star lanterns, wreaths and poinsettia accents",
            floor_decor: "clean floor with gift arrangements and soft fairy-light spill",
            cultural_elements: "Christmas tree, star lanterns, gifts, wreaths",
            lighting: "cozy warm fairy-light glow",
            header_palette: "deep red to forest green with gold sparkle",
            mood: "warm, generous, family celebration",
        }
    } else {
        FestivalTheme {
            saree: "premium festive silk saree blending the festival's traditional colors \
                    with the business brand palette",
            jewellery: CELEBRITY_JEWELLERY,
            decorations: "fresh flower garlands, traditional lamps, and tasteful festive \
                          accents appropriate to the occasion layered over the business \
                          premises",
            floor_decor: "festive rangoli appropriate to the occasion",
            cultural_elements: "flower garlands, traditional lamps, festive rangoli",
            lighting: "warm celebratory glow over natural interior light",
            header_palette: "rich festive gradient harmonized with the brand colors",
            mood: "celebratory, premium, culturally authentic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_festivals_resolve() {
        assert!(festival_theme("Maha Shivaratri").saree.contains("white/cream"));
        assert!(festival_theme("Makara Sankranti").decorations.contains("sugarcane"));
        assert!(festival_theme("diwali").floor_decor.contains("rangoli"));
    }

    #[test]
    fn test_unknown_festival_gets_generic_theme() {
        let theme = festival_theme("Local Temple Anniversary");
        assert!(theme.saree.contains("brand palette"));
        assert!(!theme.decorations.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            festival_theme("DUSSEHRA").header_palette,
            festival_theme("dussehra").header_palette
        );
    }
}
