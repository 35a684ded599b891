use raymarch_demos::mandelbulb::MandelbulbApp;

fn main() {
    raymarch_demos::main_with("mandelbulb", |config, shader| {
        MandelbulbApp::new(config.runtime.title.clone(), shader)
    });
}
