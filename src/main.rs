fn main() {
    pixkit_bin::main();
}
