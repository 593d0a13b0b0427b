use std::time::Duration;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("r", "random", "seed the board randomly instead of interactively");
        opts.optopt("p", "pattern", "seed from a named pattern", "NAME");
        opts.optopt("w", "width", "set board width", "COLS");
        opts.optopt("h", "height", "set board height", "ROWS");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );

        let matches = opts.parse(args.iter().map(T::as_ref)).unwrap();
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: golife [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn random(&self) -> bool {
        self.matches.opt_present("random")
    }
    pub fn pattern(&self) -> Option<String> {
        self.matches.opt_str("pattern")
    }

    /// Board dimensions as (rows, cols), default 8x8.
    pub fn grid_size(&self) -> (usize, usize) {
        let rows = self.matches.opt_get("height").unwrap().unwrap_or(8);
        let cols = self.matches.opt_get("width").unwrap().unwrap_or(8);
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        (rows, cols)
    }

    pub fn sleep(&self) -> Duration {
        let millis = self.matches.opt_get("sleep").unwrap().unwrap_or(2000);
        Duration::from_millis(millis)
    }
}
