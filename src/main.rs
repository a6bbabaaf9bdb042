fn main() {
    magicgen::cli::run();
}
