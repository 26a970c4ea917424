fn main() -> std::process::ExitCode {
    jfxlaunch_lib::run()
}
