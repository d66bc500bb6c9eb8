use holofetch::app::Application;

fn main() {
    let code = Application::new().run();
    std::process::exit(code);
}
