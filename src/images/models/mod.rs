pub mod generate_image_response;
