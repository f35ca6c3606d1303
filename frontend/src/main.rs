fn main() {
    lopo_frontend::run();
}
