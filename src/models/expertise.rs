use serde::{Deserialize, Serialize};

/// A subcategory inside an admin-managed expertise category.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExpertiseSubcategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Id of the owning category; only meaningful alongside it.
    pub parent_id: String,
}

/// An admin-managed expertise area with its subcategories.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExpertiseCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub subcategories: Vec<ExpertiseSubcategory>,
}

/// One fetch of `/public/expertise`. Lookups stay inside the fetch so a
/// subcategory can never be resolved against a category from a different
/// snapshot of the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<ExpertiseCategory>,
}

impl Catalog {
    pub fn new(categories: Vec<ExpertiseCategory>) -> Self {
        Catalog { categories }
    }

    pub fn categories(&self) -> &[ExpertiseCategory] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, id: &str) -> Option<&ExpertiseCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.category(id).map(|c| c.name.as_str())
    }

    pub fn subcategory(&self, category_id: &str, id: &str) -> Option<&ExpertiseSubcategory> {
        self.category(category_id)?
            .subcategories
            .iter()
            .find(|s| s.id == id)
    }

    /// Every subcategory's `parentId` must point at the category that
    /// contains it. Returns the first offending subcategory id.
    pub fn check_parent_links(&self) -> Result<(), String> {
        for category in &self.categories {
            for sub in &category.subcategories {
                if sub.parent_id != category.id {
                    return Err(sub.id.clone());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let json = serde_json::json!([
            {
                "_id": "cat-design",
                "name": "Design",
                "slug": "design",
                "description": "Visual work",
                "color": "#6366f1",
                "subcategories": []
            },
            {
                "_id": "cat-tutor",
                "name": "Tutor",
                "slug": "tutor",
                "description": "",
                "color": "#10b981",
                "subcategories": [
                    {
                        "_id": "sub-lang",
                        "name": "Language",
                        "slug": "language",
                        "description": "",
                        "parentId": "cat-tutor"
                    }
                ]
            }
        ]);
        Catalog::new(serde_json::from_value(json).unwrap())
    }

    #[test]
    fn resolves_subcategory_only_within_its_parent() {
        let catalog = catalog();
        assert!(catalog.subcategory("cat-tutor", "sub-lang").is_some());
        assert!(catalog.subcategory("cat-design", "sub-lang").is_none());
    }

    #[test]
    fn parent_link_check_flags_orphans() {
        let mut categories = catalog().categories.clone();
        categories[0].subcategories.push(ExpertiseSubcategory {
            id: "sub-stray".into(),
            name: "Stray".into(),
            slug: "stray".into(),
            description: String::new(),
            parent_id: "cat-tutor".into(),
        });
        let catalog = Catalog::new(categories);
        assert_eq!(catalog.check_parent_links(), Err("sub-stray".to_string()));
    }
}
