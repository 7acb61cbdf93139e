fn main() {
    portfolio_web::mount();
}
