//! Static sections: about, experience timeline, contact details, footer.

use chrono::Datelike;
use folio_core::PortfolioContent;

fn heading(title: &str) {
    println!();
    println!("  {}", console::style(title).bold().underlined());
    println!();
}

pub fn print_about(content: &PortfolioContent) {
    heading("About Me");
    for paragraph in &content.profile.about {
        println!("  {}", paragraph);
        println!();
    }

    let stats = content
        .stats
        .iter()
        .map(|stat| format!("{} {}", console::style(&stat.value).bold().cyan(), stat.label))
        .collect::<Vec<_>>()
        .join("   ");
    println!("  {}", stats);

    heading("Technologies I Work With");
    let badges = content
        .tech_badges
        .iter()
        .map(|badge| format!("{} {}", badge.icon, badge.name))
        .collect::<Vec<_>>()
        .join("  ");
    println!("  {}", badges);
}

pub fn print_experience(content: &PortfolioContent) {
    heading("Work Experience");
    let last = content.experience.len().saturating_sub(1);
    for (index, entry) in content.experience.iter().enumerate() {
        println!("  ● {}", console::style(&entry.title).bold());
        println!("  │ {}", console::style(&entry.company).cyan());
        println!("  │ {}", console::style(&entry.period).dim());
        println!("  │ {}", entry.description);
        println!("  │ {}", console::style(entry.technologies.join(" · ")).magenta());
        if index != last {
            println!("  │");
        }
    }
}

pub fn print_contact_details(content: &PortfolioContent) {
    heading("Get In Touch");
    for info in &content.contact {
        println!("  {:<10} {}", console::style(&info.title).bold(), info.value);
    }
    for link in &content.socials {
        println!("  {:<10} {}", console::style(&link.label).bold(), console::style(&link.href).dim());
    }
}

pub fn footer_line(name: &str, year: i32) -> String {
    format!("Made with ♥ by {}  ·  © {} All rights reserved.", name, year)
}

pub fn print_footer(content: &PortfolioContent) {
    let year = chrono::Local::now().year();
    println!();
    println!("  {}", console::style(footer_line(&content.profile.name, year)).dim());
}
