pub mod cart_projection;
