pub mod digit_root;
pub mod gcd;
pub mod linear_rec;
