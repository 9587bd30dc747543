fn main() {
    uniffi::generate_scaffolding("src/footprint.udl").unwrap();
}
