use super::model::MarketListing;

/// The mock marketplace catalog. Kept as plain data so the UI, the purchase
/// flow, and the tests all see the same six listings.
pub fn listings() -> Vec<MarketListing> {
    fn entry(
        id: &str,
        name: &str,
        creator: &str,
        description: &str,
        price: &str,
        category: &str,
        icon: &str,
        status: &str,
        tags: &[&str],
        screenshots: u8,
        rating: f32,
    ) -> MarketListing {
        MarketListing {
            id: id.to_string(),
            name: name.to_string(),
            creator: creator.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            category: category.to_string(),
            icon: icon.to_string(),
            status: status.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            screenshots,
            rating,
        }
    }

    vec![
        entry(
            "file_organizer",
            "Smart File Organizer",
            "AutomationLab",
            "Automatically organize files by type, date, or custom rules",
            "$4.99",
            "files",
            "📁",
            "offline",
            &["Files", "Productivity"],
            3,
            4.8,
        ),
        entry(
            "photo_enhancer",
            "Batch Photo Enhancer",
            "ImagePro",
            "Enhance multiple photos at once with AI-powered filters",
            "$6.99",
            "productivity",
            "🖼️",
            "offline",
            &["Photos", "AI"],
            4,
            4.9,
        ),
        entry(
            "social_scheduler",
            "Social Media Scheduler",
            "SocialTools",
            "Schedule posts across multiple platforms automatically",
            "$9.99",
            "social",
            "📱",
            "online",
            &["Social", "Marketing"],
            5,
            4.7,
        ),
        entry(
            "pdf_merger",
            "PDF Swiss Army Knife",
            "DocMaster",
            "Merge, split, compress, and convert PDF files effortlessly",
            "$3.99",
            "files",
            "📄",
            "offline",
            &["PDF", "Documents"],
            3,
            4.6,
        ),
        entry(
            "data_scraper",
            "Web Data Extractor",
            "DataFlow",
            "Extract data from websites and save to spreadsheets",
            "$12.99",
            "productivity",
            "🌐",
            "online",
            &["Web", "Data"],
            4,
            4.8,
        ),
        entry(
            "video_converter",
            "Universal Video Converter",
            "MediaTools",
            "Convert videos between any format with batch processing",
            "$7.99",
            "files",
            "🎬",
            "offline",
            &["Video", "Converter"],
            3,
            4.5,
        ),
    ]
}

pub fn find(id: &str) -> Option<MarketListing> {
    listings().into_iter().find(|l| l.id == id)
}

/// Source of the script a purchase materializes on disk. A real backend
/// would deliver this; here every listing gets the same stub body.
pub fn mock_script_source(listing: &MarketListing) -> String {
    format!(
        "-- {name}\n\
         -- Created by {creator}\n\
         \n\
         function run_automation(input)\n\
         \x20   host.log(\"Running {name}\")\n\
         \x20   host.log(\"Input: \" .. input)\n\
         \n\
         \x20   -- Your automation logic here\n\
         \x20   return \"Automation completed successfully!\"\n\
         end\n",
        name = listing.name,
        creator = listing.creator,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_listing_ids_are_unique() {
        let all = listings();
        let ids: HashSet<_> = all.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert_eq!(find("pdf_merger").unwrap().creator, "DocMaster");
        assert!(find("does_not_exist").is_none());
    }

    #[test]
    fn test_mock_source_defines_entry_function() {
        let listing = find("file_organizer").unwrap();
        let source = mock_script_source(&listing);
        assert!(source.contains("function run_automation(input)"));
        assert!(source.contains(&listing.name));
    }

    #[test]
    fn test_mock_source_runs() {
        let listing = find("video_converter").unwrap();
        let source = mock_script_source(&listing);
        let out = crate::scripts::engine::evaluate(&listing.id, &source, "test").unwrap();
        assert_eq!(out, "Automation completed successfully!");
    }
}
