use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use interpfin::configuration::Configuration;
use interpfin::manager::manager::IManager;
use interpfin::math::interpolation::interpolator::Interpolator;

const USAGE: &str = "usage: interpfin <config.json> <interpolator name> <x>...";

/// Pairs every query with its value, in the order the queries were given.
fn evaluate(interpolator: &dyn Interpolator, xs: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(interpolator.values(xs, None)).collect()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [config_path, name, points @ ..] = args.as_slice() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let mut xs = Vec::with_capacity(points.len());
    for point in points {
        match point.parse::<f64>() {
            Ok(x) => xs.push(x),
            Err(error) => {
                eprintln!("invalid point '{}': {}", point, error);
                return ExitCode::FAILURE;
            }
        }
    }

    let config = Configuration::new();
    if let Err(error) = config.from_reader(config_path) {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }

    let interpolator = match config
        .interpolator_generator_manager()
        .get(name)
        .and_then(|generator| Ok(generator.generate()?))
    {
        Ok(interpolator) => interpolator,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    for (x, y) in evaluate(interpolator.as_ref(), &xs) {
        println!("{}, {}", x, y);
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use interpfin::math::interpolation::interpolatorgenerator::new_linear;

    use super::*;

    #[test]
    fn keeps_argument_order() {
        let linear = new_linear(vec![0.0, 10.0], vec![0.0, 20.0]).unwrap();
        assert_eq!(
            evaluate(linear.as_ref(), &[7.0, 1.0, 4.0]),
            vec![(7.0, 14.0), (1.0, 2.0), (4.0, 8.0)]
        );
    }
}
