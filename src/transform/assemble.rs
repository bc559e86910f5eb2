//! Full-document assembly.

use tracing::debug;

use crate::config::VendorConfig;
use crate::error::Result;
use crate::model::{InventoryDocument, RawRow};
use crate::transform::categories::CategoryRegistry;
use crate::transform::normalize::normalize_row;

/// Assemble the inventory document from the full row set.
///
/// Two passes over the rows: the first builds and finalizes the category
/// universe, the second normalizes each row against it. Included records
/// are then stable-sorted by display name and given dense 0-based IDs in
/// sorted order — the only place IDs are assigned.
pub fn assemble(rows: &[RawRow], vendor: &VendorConfig) -> Result<InventoryDocument> {
    let mut registry = CategoryRegistry::new();
    for row in rows {
        registry.register(&row.categories);
    }
    registry.finalize();

    let mut models = Vec::new();
    for row in rows {
        if let Some(record) = normalize_row(row, &registry, vendor)? {
            models.push(record);
        }
    }

    debug!(
        "Assembled {} model(s) from {} row(s), {} categories",
        models.len(),
        rows.len(),
        registry.len()
    );

    // Vec::sort_by is stable; equal names keep their input order
    models.sort_by(|a, b| a.name.cmp(&b.name));
    for (index, model) in models.iter_mut().enumerate() {
        model.id = index;
    }

    Ok(InventoryDocument {
        vendor: vendor.clone(),
        categories: registry.categories(),
        models,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(prop: &str, tags: &[&str], xmodel: &str) -> RawRow {
        RawRow {
            prop: prop.to_string(),
            categories: tags.iter().map(|t| t.to_string()).collect(),
            xmodel: if xmodel.is_empty() {
                None
            } else {
                Some(xmodel.to_string())
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_end_to_end_ordering_and_ids() {
        let rows = vec![
            row("B", &["X"], "b.xml"),
            row("A", &["X", "Y"], "a.xml"),
        ];

        let doc = assemble(&rows, &VendorConfig::default()).unwrap();

        assert_eq!(doc.categories.len(), 2);
        assert_eq!((doc.categories[0].id, doc.categories[0].name.as_str()), (0, "X"));
        assert_eq!((doc.categories[1].id, doc.categories[1].name.as_str()), (1, "Y"));

        assert_eq!(doc.models.len(), 2);
        assert_eq!(doc.models[0].name, "A");
        assert_eq!(doc.models[0].id, 0);
        assert_eq!(doc.models[0].category_ids, vec![0, 1]);
        assert_eq!(doc.models[1].name, "B");
        assert_eq!(doc.models[1].id, 1);
        assert_eq!(doc.models[1].category_ids, vec![0]);
    }

    #[test]
    fn test_excluded_rows_still_contribute_categories() {
        let rows = vec![
            row("NoAsset", &["Lonely"], ""),
            row("Star", &["Holiday"], "star.xml"),
        ];

        let doc = assemble(&rows, &VendorConfig::default()).unwrap();
        assert_eq!(doc.models.len(), 1);

        let names: Vec<&str> = doc.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Holiday", "Lonely"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let mut first = row("Star", &[], "first.xml");
        first.nodes = Some(1);
        let mut second = row("Star", &[], "second.xml");
        second.nodes = Some(2);

        let doc = assemble(&[first, second], &VendorConfig::default()).unwrap();
        assert_eq!(doc.models[0].pixel_count, 1);
        assert_eq!(doc.models[1].pixel_count, 2);
        assert_eq!(doc.models[0].id, 0);
        assert_eq!(doc.models[1].id, 1);
    }

    #[test]
    fn test_ids_are_dense_and_contiguous() {
        let rows: Vec<RawRow> = ["D", "C", "B", "A"]
            .iter()
            .map(|p| row(p, &[], "m.xml"))
            .collect();

        let doc = assemble(&rows, &VendorConfig::default()).unwrap();
        let ids: Vec<usize> = doc.models.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        let names: Vec<&str> = doc.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }
}
