//! Template fabrication
//!
//! Fills the studio's stock templates with the artisan's details. This is
//! the offline path: no remote collaborator, deterministic output.

use crate::prices::Price;

use super::{
    BrandingError, BrandingRequest, BrandingResult, Locale, PriceRange, ProductCopy, Translation,
};

/// Fabricates a complete brand identity from the stock templates.
///
/// # Errors
///
/// Returns [`BrandingError::EmptyBusinessName`] when the request's business
/// name is blank.
pub fn fabricate(request: &BrandingRequest) -> Result<BrandingResult, BrandingError> {
    let name = request.business_name.trim();

    if name.is_empty() {
        return Err(BrandingError::EmptyBusinessName);
    }

    let craft = request.craft.prose_label();

    Ok(BrandingResult {
        mark: "🎨".to_string(),
        palette: request
            .craft
            .palette()
            .iter()
            .map(ToString::to_string)
            .collect(),
        tagline: format!("{name} - Where Heritage Meets Art"),
        description: format!(
            "{name} celebrates the timeless beauty of {craft} with authentic, \
             handcrafted pieces that tell stories of cultural heritage. Each creation \
             reflects generations of artistic wisdom passed down through skilled hands, \
             bringing the soul of traditional artistry to modern life."
        ),
        cultural_story: format!(
            "The art of {craft} has been woven into the fabric of our culture for \
             centuries. At {name}, we honor this legacy by preserving ancient techniques \
             while embracing contemporary design. Our artisans are not just creators; \
             they are cultural guardians, keeping alive the stories, symbols, and \
             spiritual significance embedded in every piece."
        ),
        product_lines: product_lines(request),
        social_posts: vec![
            "🎨 Every piece tells a story of heritage and heart. Discover the soul of \
             traditional craftsmanship."
                .to_string(),
            "✨ Handcrafted with love, inspired by generations of artistic wisdom. \
             #TraditionalArt #HandmadeTreasures"
                .to_string(),
            "🌟 Where ancient techniques meet modern beauty. Preserving culture, one \
             creation at a time."
                .to_string(),
        ],
        translations: translations(name, craft),
    })
}

fn product_lines(request: &BrandingRequest) -> Vec<ProductCopy> {
    let product_type = request.product_type.as_deref().unwrap_or("Craft");
    let pieces = request.product_type.as_deref().unwrap_or("pieces");

    vec![
        ProductCopy {
            name: format!("Traditional {product_type} Collection"),
            description: format!(
                "Handcrafted {pieces} that embody the essence of traditional artistry. \
                 Each item is meticulously created using time-honored techniques passed \
                 down through generations.",
                pieces = pieces.to_lowercase()
            ),
            cultural_significance: "These pieces represent more than just beautiful \
                 objects - they are carriers of cultural memory, each pattern and form \
                 holding deep meaning within our artistic heritage."
                .to_string(),
            materials: vec![
                "Natural clay".to_string(),
                "Organic pigments".to_string(),
                "Traditional tools".to_string(),
                "Sustainable resources".to_string(),
            ],
            price_range: PriceRange {
                low: Price::from_major(45),
                high: Price::from_major(120),
            },
        },
        ProductCopy {
            name: "Contemporary Heritage Line".to_string(),
            description: "Modern interpretations of classic designs, bridging the gap \
                 between traditional craftsmanship and contemporary aesthetics."
                .to_string(),
            cultural_significance: "By adapting ancient motifs for modern life, these \
                 pieces ensure our cultural traditions remain relevant and alive for \
                 future generations."
                .to_string(),
            materials: vec![
                "Eco-friendly materials".to_string(),
                "Traditional dyes".to_string(),
                "Sustainable wood".to_string(),
                "Recycled metals".to_string(),
            ],
            price_range: PriceRange {
                low: Price::from_major(60),
                high: Price::from_major(200),
            },
        },
    ]
}

fn translations(name: &str, craft: &str) -> Vec<Translation> {
    let spanish_craft = match craft {
        "traditional crafts" => "las artesanías tradicionales".to_string(),
        other => format!("el arte de {other}"),
    };
    let french_craft = match craft {
        "traditional crafts" => "l'artisanat traditionnel".to_string(),
        other => format!("l'art de {other}"),
    };

    vec![
        Translation {
            locale: Locale::Spanish,
            tagline: format!("{name} - Donde la Herencia Encuentra el Arte"),
            description: format!(
                "{name} celebra la belleza atemporal de {spanish_craft} con piezas \
                 auténticas hechas a mano que cuentan historias de herencia cultural."
            ),
        },
        Translation {
            locale: Locale::French,
            tagline: format!("{name} - Où l'Héritage Rencontre l'Art"),
            description: format!(
                "{name} célèbre la beauté intemporelle de {french_craft} avec des \
                 pièces authentiques faites à la main qui racontent des histoires de \
                 patrimoine culturel."
            ),
        },
        Translation {
            locale: Locale::Hindi,
            tagline: format!("{name} - जहाँ विरासत कला से मिलती है"),
            description: format!(
                "{name} सांस्कृतिक विरासत की कहानियाँ कहने वाली प्रामाणिक, हस्तनिर्मित \
                 कृतियों के साथ पारंपरिक शिल्प की कालातीत सुंदरता का जश्न मनाता है।"
            ),
        },
    ]
}
