use raymarch_demos::combining::CombiningApp;

fn main() {
    raymarch_demos::main_with("combining", |_, shader| CombiningApp::new(shader));
}
