fn main() {
    #[cfg(feature = "csr")]
    authgate::start();
}
