//! Project metadata shown on labels and in the detail view.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExternalContent {
    /// Hosted video, identified by the provider's id.
    Video { provider_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemMeta {
    pub client: String,
    pub subtitle: String,
    pub category: String,
    /// Looping preview streamed onto the sphere.
    pub preview: Option<String>,
    pub content: Option<ExternalContent>,
}

impl ItemMeta {
    pub fn new(client: &str, subtitle: &str, category: &str) -> Self {
        Self {
            client: client.to_owned(),
            subtitle: subtitle.to_owned(),
            category: category.to_owned(),
            preview: None,
            content: None,
        }
    }

    pub fn with_preview(mut self, path: &str) -> Self {
        self.preview = Some(path.to_owned());
        self
    }

    pub fn with_video(mut self, provider_id: &str) -> Self {
        self.content = Some(ExternalContent::Video {
            provider_id: provider_id.to_owned(),
        });
        self
    }
}

pub fn default_catalog() -> Vec<ItemMeta> {
    vec![
        ItemMeta::new("Delimobil", "DOOH in Style", "DOOH")
            .with_preview("videos/DelimobilDooh_LAB_WEB.mp4")
            .with_video("1163618338"),
        ItemMeta::new("Fonbet KZ", "KHL moments", "TV, OLV")
            .with_preview("videos/FonbetKHL_LAB_WEB.mp4")
            .with_video("1163618380"),
        ItemMeta::new("Oakley", "Plantaris launch", "OLV")
            .with_preview("videos/OakleyPlantaris_LAB_WEB.mp4")
            .with_video("1163618518"),
        ItemMeta::new("Samolet", "Neighbourhood 360", "TV, OLV, DOOH")
            .with_preview("videos/Samolet360_LAB_WEB.mp4")
            .with_video("1163618584"),
        ItemMeta::new("T-Bank", "New Year wish", "OLV, DOOH")
            .with_preview("videos/TbankNY_LAB_WEB.mp4")
            .with_video("1163618628"),
    ]
}

/// Metadata for `n` items. When `n` exceeds the catalog, entries repeat with
/// a numbered client name so labels stay distinguishable.
pub fn expand(catalog: &[ItemMeta], n: usize) -> Vec<ItemMeta> {
    if catalog.is_empty() {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let mut meta = catalog[i % catalog.len()].clone();
            let round = i / catalog.len();
            if round > 0 {
                meta.client = format!("{} #{}", meta.client, round + 1);
            }
            meta
        })
        .collect()
}
