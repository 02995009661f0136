//! `config` and `title` commands.

use anyhow::Result;

use crate::cli::args::{OutputArgs, TitleArgs};
use crate::cli::output::write_json;
use crate::config::PortfolioConfig;
use crate::config::title::{professional_title, seo_title, title_suggestions};

pub fn run_config(config: &PortfolioConfig, output: &OutputArgs) -> Result<()> {
    write_json(config, output)
}

pub fn run_title(config: &PortfolioConfig, args: &TitleArgs) -> Result<()> {
    for line in titles(config, args) {
        println!("{line}");
    }
    Ok(())
}

fn titles(config: &PortfolioConfig, args: &TitleArgs) -> Vec<String> {
    if args.suggestions {
        return title_suggestions(config);
    }

    match args.format {
        Some(format) => vec![professional_title(
            &config.personal.name,
            &config.personal.title,
            format,
        )],
        None => vec![seo_title(config, args.max_len)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::config::title::TitleFormat;

    fn args(suggestions: bool, format: Option<TitleFormat>, max_len: usize) -> TitleArgs {
        TitleArgs {
            suggestions,
            format,
            max_len,
        }
    }

    #[test]
    fn test_titles() {
        let config = test_parse_config(
            "[personal]\nname = \"Alice\"\ntitle = \"Engineer\"\n[seo]\ntitle_template = \"{name} | {role}\"",
        );

        assert_eq!(titles(&config, &args(false, None, 60)), ["Alice | Engineer"]);
        assert_eq!(titles(&config, &args(false, None, 5)), ["Alice"]);
        assert_eq!(
            titles(&config, &args(false, Some(TitleFormat::Creative), 60)),
            ["Alice • Engineer • Portfolio"]
        );
        assert_eq!(titles(&config, &args(true, None, 60)).len(), 8);
    }
}
