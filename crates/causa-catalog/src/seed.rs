//! # Seed Catalog
//!
//! The catalog the discovery site ships with: the resource library, the
//! causes suggested by the discovery quiz, and the regions on the world map.

use serde_json::json;

use causa_core::{CausaError, Entry, EntryId, EntryKind, ValidationError};

use crate::store::CatalogStore;

const UNSPLASH: &str = "https://images.unsplash.com/";

fn image(photo: &str) -> serde_json::Value {
    json!(format!("{UNSPLASH}{photo}"))
}

#[allow(clippy::too_many_arguments)]
fn resource(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    tags: &[&str],
    date: &str,
    read_time: &str,
    photo: &str,
) -> Result<Entry, ValidationError> {
    Ok(Entry::new(EntryId::new(id)?, EntryKind::Resource, title)
        .with_description(description)
        .with_category(category)
        .with_tags(tags.iter().copied())?
        .with_attribute("date", json!(date))
        .with_attribute("read_time", json!(read_time))
        .with_attribute("image_url", image(photo)))
}

fn cause(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    skills: &[&str],
    organizations: &[&str],
    photo: &str,
) -> Result<Entry, ValidationError> {
    let organizations: Vec<serde_json::Value> = organizations
        .iter()
        .map(|name| json!({ "name": name, "website": "#" }))
        .collect();
    Ok(Entry::new(EntryId::new(id)?, EntryKind::Cause, title)
        .with_description(description)
        .with_tags(tags.iter().copied())?
        .with_attribute("skills", json!(skills))
        .with_attribute("organizations", json!(organizations))
        .with_attribute("image_url", image(photo)))
}

fn region(
    id: &str,
    name: &str,
    description: &str,
    issues: &[&str],
    initiatives: &[&str],
    (top, left): (&str, &str),
) -> Result<Entry, ValidationError> {
    Ok(Entry::new(EntryId::new(id)?, EntryKind::Region, name)
        .with_description(description)
        .with_tags(issues.iter().copied())?
        .with_attribute("initiatives", json!(initiatives))
        .with_attribute("coordinates", json!({ "top": top, "left": left })))
}

/// Library resources.
pub fn resources() -> Result<Vec<Entry>, ValidationError> {
    Ok(vec![
        resource(
            "1",
            "Understanding Climate Justice",
            "A comprehensive guide to climate justice principles and global initiatives.",
            "Climate",
            &["Climate", "Justice", "Guide"],
            "2023-05-15",
            "8 min read",
            "photo-1501854140801-50d01698950b",
        )?,
        resource(
            "2",
            "Digital Literacy Programs",
            "How digital literacy initiatives are closing the educational gap in rural communities.",
            "Education",
            &["Digital", "Education", "Rural"],
            "2023-06-22",
            "5 min read",
            "photo-1488972685288-c3fd157d7c7a",
        )?,
        resource(
            "3",
            "Clean Water Access Report",
            "Latest research on global clean water accessibility and innovative solutions.",
            "Health",
            &["Water", "Health", "Research"],
            "2023-04-10",
            "12 min read",
            "photo-1433086966358-54859d0ed716",
        )?,
        resource(
            "4",
            "Community Organizing Toolkit",
            "Practical strategies and tools for effective community organization and mobilization.",
            "Community",
            &["Organizing", "Community", "Toolkit"],
            "2023-07-05",
            "10 min read",
            "photo-1517022812141-23620dba5c23",
        )?,
        resource(
            "5",
            "Sustainable Urban Development",
            "Case studies on transforming urban spaces for sustainability and community well-being.",
            "Urban",
            &["Urban", "Sustainability", "Development"],
            "2023-08-12",
            "7 min read",
            "photo-1527576539890-dfa815648363",
        )?,
        resource(
            "6",
            "Indigenous Rights Framework",
            "Understanding indigenous rights and their importance in conservation efforts.",
            "Rights",
            &["Indigenous", "Rights", "Conservation"],
            "2023-03-30",
            "9 min read",
            "photo-1472396961693-142e6e269027",
        )?,
        resource(
            "7",
            "Ocean Conservation Strategies",
            "Current approaches to preserving marine ecosystems and reducing plastic pollution.",
            "Climate",
            &["Ocean", "Conservation", "Plastic"],
            "2023-09-05",
            "6 min read",
            "photo-1493397212122-2b85dda8106b",
        )?,
        resource(
            "8",
            "Gender Equality in Education",
            "Research on creating inclusive learning environments and closing gender gaps.",
            "Education",
            &["Gender", "Equality", "Inclusion"],
            "2023-07-18",
            "11 min read",
            "photo-1581091226825-a6a2a5aee158",
        )?,
        resource(
            "9",
            "Mental Health Advocacy",
            "Resources for supporting mental health initiatives and reducing stigma.",
            "Health",
            &["Mental Health", "Advocacy", "Wellbeing"],
            "2023-08-22",
            "8 min read",
            "photo-1498050108023-c5249f4df085",
        )?,
    ])
}

/// Causes suggested by the discovery quiz.
pub fn causes() -> Result<Vec<Entry>, ValidationError> {
    Ok(vec![
        cause(
            "cause-1",
            "Climate Justice",
            "Addressing the disproportionate impacts of climate change on vulnerable communities through policy, education, and community action.",
            &["Environment", "Justice", "Policy"],
            &["Research", "Communication", "Organization", "Policy Analysis"],
            &[
                "Climate Justice Alliance",
                "Earth Rights International",
                "Indigenous Environmental Network",
            ],
            "photo-1501854140801-50d01698950b",
        )?,
        cause(
            "cause-2",
            "Digital Rights",
            "Advocating for privacy, accessibility, and freedom in the digital world through research, education, and policy development.",
            &["Technology", "Rights", "Privacy"],
            &["Programming", "Legal Analysis", "Research", "Writing"],
            &["Electronic Frontier Foundation", "Digital Rights Watch", "Access Now"],
            "photo-1461749280684-dccba630e2f6",
        )?,
        cause(
            "cause-3",
            "Food Security",
            "Working to ensure all people have reliable access to nutritious, affordable food through policy, community programs, and sustainable agriculture.",
            &["Hunger", "Agriculture", "Health"],
            &["Agriculture", "Community Organizing", "Logistics", "Nutrition"],
            &[
                "Food First",
                "World Food Programme",
                "Community Food Security Coalition",
            ],
            "photo-1517022812141-23620dba5c23",
        )?,
        cause(
            "cause-4",
            "Racial Equity",
            "Dismantling systemic racism and promoting equal opportunities for all through education, policy reform, and community empowerment.",
            &["Justice", "Equality", "Community"],
            &["Education", "Community Organizing", "Policy Analysis", "Communications"],
            &["Race Forward", "Equal Justice Initiative", "Color of Change"],
            "photo-1605810230434-7631ac76ec81",
        )?,
        cause(
            "cause-5",
            "Mental Health Advocacy",
            "Promoting mental health awareness, reducing stigma, and improving access to quality care for all people.",
            &["Health", "Advocacy", "Education"],
            &["Psychology", "Communications", "Fundraising", "Support"],
            &[
                "Mental Health America",
                "National Alliance on Mental Illness",
                "Strong Minds",
            ],
            "photo-1493397212122-2b85dda8106b",
        )?,
        cause(
            "cause-6",
            "Early Childhood Education",
            "Ensuring all children have access to quality early education that supports their cognitive, social, and emotional development.",
            &["Education", "Children", "Development"],
            &[
                "Teaching",
                "Curriculum Development",
                "Child Development",
                "Administration",
            ],
            &[
                "National Association for the Education of Young Children",
                "Zero to Three",
                "Global Partnership for Education",
            ],
            "photo-1460925895917-afdab827c52f",
        )?,
    ])
}

/// Regions on the world map.
pub fn regions() -> Result<Vec<Entry>, ValidationError> {
    Ok(vec![
        region(
            "north-america",
            "North America",
            "A diverse region with a wide range of social and environmental challenges.",
            &["Climate Change", "Healthcare Access", "Housing Inequality", "Racial Justice", "Immigration"],
            &[
                "Green New Deal Coalition",
                "Universal Healthcare Campaign",
                "Affordable Housing Initiative",
                "Racial Equity Network",
                "Immigrant Rights Project",
            ],
            ("30%", "20%"),
        )?,
        region(
            "south-america",
            "South America",
            "Rich in natural resources and cultural heritage, facing environmental and social challenges.",
            &["Deforestation", "Indigenous Rights", "Economic Inequality", "Political Corruption", "Water Access"],
            &[
                "Amazon Conservation Alliance",
                "Indigenous Rights Collective",
                "Economic Justice Network",
                "Anti-Corruption Coalition",
                "Clean Water Projects",
            ],
            ("60%", "30%"),
        )?,
        region(
            "europe",
            "Europe",
            "A complex political landscape with diverse approaches to social and environmental issues.",
            &["Migration Crisis", "Climate Action", "Digital Rights", "Social Integration", "Energy Transition"],
            &[
                "Refugee Support Network",
                "Climate Pact Alliance",
                "Digital Rights Observatory",
                "Social Integration Programs",
                "Renewable Energy Coalition",
            ],
            ("25%", "48%"),
        )?,
        region(
            "africa",
            "Africa",
            "A continent of immense diversity facing unique development and environmental challenges.",
            &["Water Scarcity", "Education Access", "Healthcare Infrastructure", "Food Security", "Conservation"],
            &[
                "Water Access Projects",
                "Education for All Initiative",
                "Healthcare Systems Strengthening",
                "Sustainable Agriculture Programs",
                "Wildlife Conservation Efforts",
            ],
            ("48%", "50%"),
        )?,
        region(
            "asia",
            "Asia",
            "The largest continent with diverse cultures and rapid development alongside social challenges.",
            &["Climate Resilience", "Labor Rights", "Gender Equality", "Urban Development", "Air Pollution"],
            &[
                "Climate Adaptation Network",
                "Fair Labor Coalition",
                "Women's Empowerment Alliance",
                "Sustainable Cities Initiative",
                "Clean Air Projects",
            ],
            ("35%", "70%"),
        )?,
        region(
            "oceania",
            "Oceania",
            "Island nations facing unique challenges related to climate change and conservation.",
            &["Rising Sea Levels", "Indigenous Rights", "Conservation", "Climate Resilience", "Sustainable Tourism"],
            &[
                "Climate Change Adaptation",
                "Indigenous Cultural Preservation",
                "Marine Conservation Projects",
                "Disaster Preparedness Network",
                "Eco-Tourism Standards",
            ],
            ("65%", "80%"),
        )?,
    ])
}

/// Every seed entry: resources, then causes, then regions.
pub fn entries() -> Result<Vec<Entry>, ValidationError> {
    let mut all = resources()?;
    all.extend(causes()?);
    all.extend(regions()?);
    Ok(all)
}

/// The seed catalog as a loaded store.
pub fn catalog() -> Result<CatalogStore, CausaError> {
    Ok(CatalogStore::load(entries()?)?)
}
