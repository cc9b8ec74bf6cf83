pub mod image_url_fields;
