//! Prompt templates for the generation service

/// Build the polite-rewrite prompt for an email.
pub fn polite_rewrite(email: &str) -> String {
    format!(
        "Rewrite this email in a polite, professional, and concise tone:\n\n{}",
        email
    )
}

/// Build the 0-100 professionalism rating prompt for an email.
pub fn professionalism_rating(email: &str) -> String {
    format!(
        "Rate the professionalism of this email from 0 to 100.\n\
        0 = rude, 100 = highly professional.\n\
        \n\
        Email:\n{}\nReturn only the number.",
        email
    )
}
