fn main() {
    beneficio_joven_admin::start();
}
