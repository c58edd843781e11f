pub mod generate_post_images;
