//! Content fixtures

use crate::{
    content::{Artisan, Event, EventKind, HeritageItem, HeritageKind, Story},
    prices::Price,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Events on the storefront calendar.
#[must_use]
pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Traditional Pottery Workshop: Sacred Clay Techniques".to_string(),
            kind: EventKind::Workshop,
            date: "2025-01-25".to_string(),
            time: "10:00 AM - 4:00 PM".to_string(),
            location: "Oaxaca Cultural Center, Mexico".to_string(),
            artisan: "María Elena Vásquez".to_string(),
            culture: "Zapotec".to_string(),
            description: "Learn the ancient art of Zapotec black clay pottery in this \
                immersive workshop, from sacred clay preparation and hand-building \
                methods to the burnishing process. Participants create their own piece \
                to take home."
                .to_string(),
            image: "https://images.unsplash.com/photo-1546006200-f8c574598b28".to_string(),
            admission: Some(Price::from_major(85)),
            capacity: 12,
            registered: 8,
            tags: strings(&["Pottery", "Hands-on", "Traditional", "Sacred Arts"]),
            featured: true,
        },
        Event {
            id: "2".to_string(),
            title: "Banarasi Silk Weaving Festival".to_string(),
            kind: EventKind::Festival,
            date: "2025-02-08".to_string(),
            time: "9:00 AM - 8:00 PM".to_string(),
            location: "Varanasi, India".to_string(),
            artisan: "Raj Kumar Singh & Master Weavers".to_string(),
            culture: "North Indian".to_string(),
            description: "A celebration of Banarasi silk weaving with live loom \
                demonstrations, storytelling sessions on the history of the craft, \
                musical performances, and a marketplace selling authentic handwoven \
                textiles directly from artisan families."
                .to_string(),
            image: "https://images.unsplash.com/photo-1705475815904-9955cd589e4b".to_string(),
            admission: None,
            capacity: 500,
            registered: 234,
            tags: strings(&["Festival", "Silk", "Music", "Cultural Heritage"]),
            featured: true,
        },
        Event {
            id: "3".to_string(),
            title: "Native American Wood Carving Exhibition".to_string(),
            kind: EventKind::Exhibition,
            date: "2025-01-30".to_string(),
            time: "12:00 PM - 6:00 PM".to_string(),
            location: "Montana Heritage Museum, USA".to_string(),
            artisan: "Elder Joseph Crow Feather".to_string(),
            culture: "Native American".to_string(),
            description: "An exhibition of ceremonial and contemporary carvings, with \
                the artist present to speak about the spiritual practice behind each \
                piece."
                .to_string(),
            image: "https://images.unsplash.com/photo-1650678192504-13af4e9efab3".to_string(),
            admission: Some(Price::from_major(12)),
            capacity: 80,
            registered: 31,
            tags: strings(&["Exhibition", "Wood Carving", "Ceremony"]),
            featured: false,
        },
    ]
}

/// First-person stories from artisans.
#[must_use]
pub fn stories() -> Vec<Story> {
    vec![
        Story {
            id: "1".to_string(),
            title: "The Clay Whisperer: Generations of Pottery Wisdom".to_string(),
            artisan: "María Elena Vásquez".to_string(),
            location: "Oaxaca, Mexico".to_string(),
            culture: "Zapotec".to_string(),
            craft: "Pottery".to_string(),
            excerpt: "In the mountains of Oaxaca, María Elena continues a 500-year \
                tradition of black clay pottery..."
                .to_string(),
            content: "For five centuries, the women of my family have shaped clay with \
                their hands, each generation passing down not just techniques but the \
                stories held in every vessel."
                .to_string(),
            image: "https://images.unsplash.com/photo-1546006200-f8c574598b28".to_string(),
            duration: "8 min read".to_string(),
            tags: strings(&["Pottery", "Zapotec", "Family Tradition"]),
            featured: true,
        },
        Story {
            id: "2".to_string(),
            title: "Threads of Memory: Weaving Stories in Silk".to_string(),
            artisan: "Raj Kumar Singh".to_string(),
            location: "Varanasi, India".to_string(),
            culture: "North Indian".to_string(),
            craft: "Silk Weaving".to_string(),
            excerpt: "In the ancient city of Varanasi, Raj continues the intricate art \
                of Banarasi silk weaving..."
                .to_string(),
            content: "The looms in our family workshop have been singing the same \
                ancient songs for over 200 years."
                .to_string(),
            image: "https://images.unsplash.com/photo-1705475815904-9955cd589e4b".to_string(),
            duration: "12 min read".to_string(),
            tags: strings(&["Silk Weaving", "Banarasi", "Wedding Traditions"]),
            featured: true,
        },
        Story {
            id: "3".to_string(),
            title: "Carving Dreams: The Soul of Wood Speaking".to_string(),
            artisan: "Elder Joseph Crow Feather".to_string(),
            location: "Montana, USA".to_string(),
            culture: "Native American".to_string(),
            craft: "Wood Carving".to_string(),
            excerpt: "Elder Joseph shares how traditional wood carving connects him to \
                his ancestors..."
                .to_string(),
            content: "When I select a piece of wood for carving, I first ask the \
                tree's permission."
                .to_string(),
            image: "https://images.unsplash.com/photo-1650678192504-13af4e9efab3".to_string(),
            duration: "10 min read".to_string(),
            tags: strings(&["Wood Carving", "Native American", "Spiritual Practice"]),
            featured: false,
        },
    ]
}

/// Entries in the heritage capsule archive.
#[must_use]
pub fn heritage_items() -> Vec<HeritageItem> {
    vec![
        HeritageItem {
            id: "1".to_string(),
            title: "The Ancient Art of Oaxacan Pottery".to_string(),
            kind: HeritageKind::Technique,
            artisan: "Maria Santos".to_string(),
            location: "Oaxaca, Mexico".to_string(),
            culture: "Zapotec".to_string(),
            views: 1247,
            likes: 89,
            duration: "12 min".to_string(),
            image: "https://images.unsplash.com/photo-1662845114342-256fdc45981d".to_string(),
            preview: "Learn the traditional methods passed down through generations, \
                from clay preparation to the sacred firing rituals..."
                .to_string(),
            tags: strings(&["pottery", "zapotec", "clay", "traditional"]),
            verified: true,
        },
        HeritageItem {
            id: "2".to_string(),
            title: "Stories from the Silk Road: A Weaver's Legacy".to_string(),
            kind: HeritageKind::Story,
            artisan: "Rajesh Kumar".to_string(),
            location: "Jaipur, India".to_string(),
            culture: "Rajasthani".to_string(),
            views: 2156,
            likes: 142,
            duration: "8 min".to_string(),
            image: "https://images.unsplash.com/photo-1715705717344-880404f93506".to_string(),
            preview: "My grandfather used to tell me stories while I learned to weave. \
                Each pattern holds the memory of our ancestors..."
                .to_string(),
            tags: strings(&["textiles", "family", "heritage", "weaving"]),
            verified: true,
        },
        HeritageItem {
            id: "3".to_string(),
            title: "The Sacred Geometry of Bulgarian Silver".to_string(),
            kind: HeritageKind::History,
            artisan: "Elena Popov".to_string(),
            location: "Sofia, Bulgaria".to_string(),
            culture: "Bulgarian".to_string(),
            views: 856,
            likes: 67,
            duration: "15 min".to_string(),
            image: "https://images.unsplash.com/photo-1676190365174-c6d1f21fab51".to_string(),
            preview: "Every filigree pattern in Bulgarian silverwork encodes centuries \
                of symbolism..."
                .to_string(),
            tags: strings(&["jewelry", "silver", "history"]),
            verified: true,
        },
    ]
}

/// Featured artisan profiles.
#[must_use]
pub fn artisans() -> Vec<Artisan> {
    vec![
        Artisan {
            id: "1".to_string(),
            name: "Maria Santos".to_string(),
            craft: "Pottery & Ceramics".to_string(),
            location: "Oaxaca, Mexico".to_string(),
            image: "https://images.unsplash.com/photo-1546006200-f8c574598b28".to_string(),
            bio: "Third-generation potter working in the Zapotec black clay tradition."
                .to_string(),
        },
        Artisan {
            id: "2".to_string(),
            name: "Rajesh Kumar".to_string(),
            craft: "Textiles & Weaving".to_string(),
            location: "Jaipur, India".to_string(),
            image: "https://images.unsplash.com/photo-1715705717344-880404f93506".to_string(),
            bio: "Block-print and handloom weaver carrying on a family workshop."
                .to_string(),
        },
        Artisan {
            id: "3".to_string(),
            name: "Elena Popov".to_string(),
            craft: "Jewelry & Metalwork".to_string(),
            location: "Sofia, Bulgaria".to_string(),
            image: "https://images.unsplash.com/photo-1676190365174-c6d1f21fab51".to_string(),
            bio: "Silversmith reviving traditional Bulgarian filigree.".to_string(),
        },
    ]
}
