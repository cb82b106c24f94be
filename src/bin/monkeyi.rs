use monkey::repl::Repl;

fn main() {
    pretty_env_logger::init();

    let mut repl = Repl::new().unwrap();
    repl.run_loop().unwrap();
}
