//! Built-in article dataset, used when no external catalog is configured.

use crate::error::Result;
use crate::models::{Category, ContentItem, parse_date};

struct RawArticle {
    slug: &'static str,
    title: &'static str,
    excerpt: &'static str,
    full_content: &'static str,
    category: Category,
    date: &'static str,
    views: u64,
}

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=500";

/// Slug of the front-page article
pub const FEATURED_SLUG: &str = "new-quantum-computing-breakthrough";

const ARTICLES: &[RawArticle] = &[
    RawArticle {
        slug: FEATURED_SLUG,
        title: "New Quantum Computing Breakthrough Could Revolutionize Data Processing",
        excerpt: "Scientists have achieved a major milestone in quantum computing that could lead to unprecedented computational power and transform numerous industries.",
        full_content: "Scientists at the Quantum Research Institute have demonstrated quantum supremacy on a problem that would occupy classical supercomputers for thousands of years.\n\nThe team developed a new approach to qubit stability, allowing longer coherence times and far lower error rates. Applications in drug discovery, climate modeling and artificial intelligence now look within reach.",
        category: Category::Discoveries,
        date: "May 15, 2023",
        views: 4289,
    },
    RawArticle {
        slug: "ancient-human-species-dna",
        title: "Ancient Human Species DNA Found in Siberian Cave",
        excerpt: "Archaeologists have discovered DNA from a previously unknown human species in a remote Siberian cave, potentially rewriting our understanding of human evolution.",
        full_content: "Archaeologists working in a remote Siberian cave have uncovered DNA traces from a previously unknown human species.\n\nSediment layers dating back roughly 200,000 years revealed a genetic profile distinct from both Neanderthals and Denisovans, suggesting a population that stayed isolated for tens of thousands of years.",
        category: Category::Discoveries,
        date: "April 23, 2023",
        views: 2134,
    },
    RawArticle {
        slug: "deep-ocean-bioluminescent-ecosystem",
        title: "Unexplored Deep Ocean Reveals Bioluminescent Ecosystem",
        excerpt: "Marine biologists have discovered a thriving ecosystem of bioluminescent organisms in the deepest parts of the Pacific Ocean, challenging previous beliefs about deep-sea life.",
        full_content: "Marine biologists exploring the Mariana Trench have found an interconnected network of light-producing creatures nearly 11,000 meters below the surface.\n\nAmong the findings was an undocumented anglerfish that uses rhythmic light patterns instead of a static lure.",
        category: Category::Discoveries,
        date: "March 18, 2023",
        views: 1853,
    },
    RawArticle {
        slug: "exoplanet-water-vapor-atmosphere",
        title: "Exoplanet with Water Vapor Atmosphere Discovered in Habitable Zone",
        excerpt: "Astronomers have identified an exoplanet with water vapor in its atmosphere located within its star's habitable zone, making it a prime candidate in the search for extraterrestrial life.",
        full_content: "The planet, designated K2-418b, orbits a red dwarf about 124 light-years from Earth. Spectroscopy from the James Webb Space Telescope revealed distinct water vapor signatures and possible cloud formations.\n\nThe team has secured more observation time to look for biosignatures such as methane and oxygen.",
        category: Category::Discoveries,
        date: "February 5, 2023",
        views: 3276,
    },
    RawArticle {
        slug: "biodegradable-microchip-technology",
        title: "Biodegradable Microchip Technology Opens New Medical Frontiers",
        excerpt: "Engineers have developed fully biodegradable microchips that can be safely implanted in the human body for temporary medical applications before dissolving completely.",
        full_content: "Engineers at the Institute for Advanced Materials have built microchips from silicon compounds and specialized polymers that break down into harmless byproducts.\n\nThe chips open new options for temporary medical monitoring and drug delivery without surgical removal.",
        category: Category::Inventions,
        date: "May 2, 2023",
        views: 1943,
    },
    RawArticle {
        slug: "artificial-leaf-carbon-capture",
        title: "Artificial Leaf Technology Achieves Record Carbon Capture Efficiency",
        excerpt: "Scientists have created a solar-powered 'artificial leaf' device that converts atmospheric CO2 into usable fuel with unprecedented efficiency, potentially transforming climate change mitigation efforts.",
        full_content: "The device mimics photosynthesis but converts carbon dioxide nearly ten times more efficiently than natural plants.\n\nSpecialized catalysts and a multi-layer design capture CO2 directly from ambient air and turn it into energy-dense fuels.",
        category: Category::Inventions,
        date: "April 15, 2023",
        views: 2567,
    },
    RawArticle {
        slug: "neuromorphic-computing-brain-chips",
        title: "Neuromorphic Computing Breakthrough: Brain-Inspired Chips Process Information Like Human Neurons",
        excerpt: "A revolutionary neuromorphic computing architecture mimics human brain function with unprecedented accuracy, promising dramatic advances in AI while consuming a fraction of the energy of conventional systems.",
        full_content: "Researchers at the Neuromorphic Systems Laboratory integrated memory and processing through synthetic neurons and synapses that reconfigure based on the data they process.\n\nThe design promises large gains in artificial intelligence at a fraction of conventional energy use.",
        category: Category::Inventions,
        date: "March 27, 2023",
        views: 3782,
    },
    RawArticle {
        slug: "coral-reef-restoration-genetically-enhanced",
        title: "Genetically Enhanced Coral Successfully Deployed in Great Barrier Reef Restoration Project",
        excerpt: "Marine biologists have deployed genetically enhanced coral species designed to withstand higher ocean temperatures in a large-scale restoration project at the Great Barrier Reef.",
        full_content: "The corals come from a selective breeding program that identified naturally heat-resistant specimens and accelerated their adaptive traits.\n\nThe project is a new frontier in preserving marine ecosystems threatened by climate change.",
        category: Category::Interventions,
        date: "May 8, 2023",
        views: 1832,
    },
    RawArticle {
        slug: "autonomous-reforestation-drones",
        title: "Autonomous Drone Network Achieves Record Reforestation in Amazon Rainforest",
        excerpt: "A fleet of AI-powered drones has successfully planted and monitored over one million native tree seedlings in deforested areas of the Amazon, demonstrating a scalable approach to ecosystem restoration.",
        full_content: "The system combines high-precision mapping, seed-firing drones and monitoring that tracks the growth of planted areas.\n\nAlgorithms pick planting locations from soil conditions and species requirements.",
        category: Category::Interventions,
        date: "April 12, 2023",
        views: 2054,
    },
    RawArticle {
        slug: "ocean-microplastic-filtration-system",
        title: "Revolutionary Ocean Microplastic Filtration System Deployed in Pacific Garbage Patch",
        excerpt: "Engineers have launched an innovative floating filtration system designed to capture microplastics from ocean water without harming marine life, with the first large-scale deployment targeting the Pacific Garbage Patch.",
        full_content: "The floating system targets particles smaller than 5mm, which conventional cleanup methods cannot remove.\n\nThe first large-scale deployment is operating in the Great Pacific Garbage Patch.",
        category: Category::Interventions,
        date: "March 3, 2023",
        views: 2976,
    },
];

pub fn builtin_articles() -> Result<Vec<ContentItem>> {
    ARTICLES
        .iter()
        .map(|raw| {
            Ok(ContentItem {
                slug: raw.slug.to_string(),
                title: raw.title.to_string(),
                excerpt: raw.excerpt.to_string(),
                full_content: raw.full_content.to_string(),
                image: PLACEHOLDER_IMAGE.to_string(),
                category: Some(raw.category),
                date: parse_date(raw.date)?,
                views: raw.views,
                featured: raw.slug == FEATURED_SLUG,
            })
        })
        .collect()
}
