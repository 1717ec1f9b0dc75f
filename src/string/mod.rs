pub mod fib_cipher;
