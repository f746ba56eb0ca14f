fn main() {
    // Bindings use uniffi proc-macros (setup_scaffolding!), no UDL to compile
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
