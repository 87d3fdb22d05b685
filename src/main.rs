fn main() {
    std::process::exit(superserial_lib::run());
}
