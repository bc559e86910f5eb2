//! Inventory XML generator.
//!
//! The output schema is fixed, so elements are written directly rather than
//! through an XML library. Every element sits on its own line with no
//! indentation. Free-form link text is wrapped in CDATA and emitted
//! verbatim; `<name>` text carries the `&amp;` substitution applied during
//! normalization and no other escaping.

use std::fmt::Write;

use crate::config::VendorConfig;
use crate::model::{Category, InventoryDocument, ModelRecord};

/// Serialize the assembled document.
pub fn generate_inventory_xml(doc: &InventoryDocument) -> String {
    let mut output = String::new();

    writeln!(output, "<modelinventory>").unwrap();
    generate_vendor_section(&mut output, &doc.vendor);
    generate_categories_section(&mut output, &doc.categories);

    writeln!(output, "<models>").unwrap();
    for model in &doc.models {
        generate_model_element(&mut output, model);
    }
    writeln!(output, "</models>").unwrap();
    writeln!(output, "</modelinventory>").unwrap();

    output
}

/// Generate the `<vendor>` block (opaque passthrough fields).
fn generate_vendor_section(output: &mut String, vendor: &VendorConfig) {
    writeln!(output, "<vendor>").unwrap();
    writeln!(output, "<name>{}</name>", vendor.name).unwrap();
    writeln!(output, "<contact>{}</contact>", vendor.contact).unwrap();
    writeln!(output, "<email>{}</email>", vendor.email).unwrap();
    writeln!(output, "<website>{}</website>", vendor.website).unwrap();
    writeln!(output, "<facebook>{}</facebook>", vendor.facebook).unwrap();
    writeln!(output, "<notes>{}</notes>", vendor.notes).unwrap();
    writeln!(output, "<logolink><![CDATA[{}]]></logolink>", vendor.logolink).unwrap();
    writeln!(output, "</vendor>").unwrap();
}

/// Generate the `<categories>` block.
fn generate_categories_section(output: &mut String, categories: &[Category]) {
    writeln!(output, "<categories>").unwrap();
    for category in categories {
        writeln!(
            output,
            "<category><id>{}</id><name>{}</name></category>",
            category.id, category.name
        )
        .unwrap();
    }
    writeln!(output, "</categories>").unwrap();
}

/// Generate one `<model>` element.
fn generate_model_element(output: &mut String, model: &ModelRecord) {
    writeln!(output, "<model>").unwrap();
    writeln!(output, "<id>{}</id>", model.id).unwrap();

    for category_id in &model.category_ids {
        writeln!(output, "<categoryid>{}</categoryid>", category_id).unwrap();
    }

    writeln!(output, "<name>{}</name>", model.name).unwrap();
    writeln!(output, "<type>{}</type>", model.model_type).unwrap();
    writeln!(
        output,
        "<weblink><![CDATA[{}]]></weblink>",
        model.web_link.as_deref().unwrap_or_default()
    )
    .unwrap();
    writeln!(output, "<material>{}</material>", model.material).unwrap();
    writeln!(output, "<width>{}</width>", model.width).unwrap();
    writeln!(output, "<height>{}</height>", model.height).unwrap();
    writeln!(output, "<thickness>{}</thickness>", model.thickness).unwrap();
    writeln!(output, "<pixelcount>{}</pixelcount>", model.pixel_count).unwrap();
    writeln!(
        output,
        "<pixeldescription>{}</pixeldescription>",
        model.pixel_description
    )
    .unwrap();
    writeln!(
        output,
        "<pixelspacing>{}</pixelspacing>",
        model.pixel_spacing
    )
    .unwrap();

    if model.image_links.is_empty() {
        writeln!(output, "<imagefile/>").unwrap();
    } else {
        for link in &model.image_links {
            writeln!(output, "<imagefile><![CDATA[{}]]></imagefile>", link).unwrap();
        }
    }

    match &model.xmodel_link {
        Some(link) => {
            writeln!(output, "<wiring>").unwrap();
            writeln!(output, "<xmodellink>").unwrap();
            writeln!(output, "<![CDATA[{}]]>", link).unwrap();
            writeln!(output, "</xmodellink>").unwrap();
            writeln!(output, "</wiring>").unwrap();
        }
        None => writeln!(output, "<wiring/>").unwrap(),
    }

    match &model.notes {
        Some(notes) => writeln!(output, "<notes>{}</notes>", notes).unwrap(),
        None => writeln!(output, "<notes/>").unwrap(),
    }

    writeln!(output, "</model>").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_record(name: &str) -> ModelRecord {
        ModelRecord {
            name: name.to_string(),
            model_type: "GE Prop".to_string(),
            material: "Coro".to_string(),
            width: "\" (cm)".to_string(),
            height: "\" (cm)".to_string(),
            thickness: "12mm".to_string(),
            pixel_description: "12mm bullet".to_string(),
            pixel_spacing: "0\" (cm)".to_string(),
            ..Default::default()
        }
    }

    fn minimal_doc(models: Vec<ModelRecord>) -> InventoryDocument {
        InventoryDocument {
            vendor: VendorConfig::default(),
            categories: Vec::new(),
            models,
        }
    }

    #[test]
    fn test_empty_document_structure() {
        let xml = generate_inventory_xml(&minimal_doc(Vec::new()));

        assert!(xml.starts_with("<modelinventory>\n"));
        assert!(xml.ends_with("</modelinventory>\n"));
        assert!(xml.contains("<vendor>\n"));
        assert!(xml.contains("<categories>\n</categories>\n"));
        assert!(xml.contains("<models>\n</models>\n"));
    }

    #[test]
    fn test_empty_collections_use_self_closing_forms() {
        let xml = generate_inventory_xml(&minimal_doc(vec![minimal_record("Arch")]));

        assert!(xml.contains("<imagefile/>"));
        assert!(xml.contains("<wiring/>"));
        assert!(xml.contains("<notes/>"));
        assert!(xml.contains("<weblink><![CDATA[]]></weblink>"));
    }

    #[test]
    fn test_wiring_block_layout() {
        let mut record = minimal_record("Arch");
        record.xmodel_link = Some("https://example.com/arch.xmodel".to_string());

        let xml = generate_inventory_xml(&minimal_doc(vec![record]));
        assert!(xml.contains(
            "<wiring>\n<xmodellink>\n<![CDATA[https://example.com/arch.xmodel]]>\n</xmodellink>\n</wiring>"
        ));
        assert!(!xml.contains("<wiring/>"));
    }

    #[test]
    fn test_image_links_one_element_per_link() {
        let mut record = minimal_record("Arch");
        record.image_links = vec!["a.jpg".to_string(), "b.jpg".to_string()];

        let xml = generate_inventory_xml(&minimal_doc(vec![record]));
        assert!(xml.contains("<imagefile><![CDATA[a.jpg]]></imagefile>\n<imagefile><![CDATA[b.jpg]]></imagefile>"));
        assert!(!xml.contains("<imagefile/>"));
    }

    #[test]
    fn test_cdata_text_is_verbatim() {
        let mut record = minimal_record("Arch");
        record.web_link = Some("https://example.com/p?a=1&b=2".to_string());

        let xml = generate_inventory_xml(&minimal_doc(vec![record]));
        assert!(xml.contains("<weblink><![CDATA[https://example.com/p?a=1&b=2]]></weblink>"));
    }

    #[test]
    fn test_category_element_layout() {
        let mut doc = minimal_doc(Vec::new());
        doc.categories = vec![Category {
            id: 0,
            name: "Winter".to_string(),
        }];

        let xml = generate_inventory_xml(&doc);
        assert!(xml.contains("<category><id>0</id><name>Winter</name></category>"));
    }
}
