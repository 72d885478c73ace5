fn main() {
    matscratch::entry_points::selftest();
}
