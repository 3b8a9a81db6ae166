//! Item lists used when simulating the site carousels.

pub const DESTINATIONS: [&str; 8] = [
    "United Kingdom",
    "United States",
    "Canada",
    "Australia",
    "Germany",
    "Ireland",
    "France",
    "New Zealand",
];

pub const PARTNERS: [&str; 10] = [
    "Partner University 1",
    "Partner University 2",
    "Partner University 3",
    "Partner University 4",
    "Partner University 5",
    "Partner University 6",
    "Partner University 7",
    "Partner University 8",
    "Partner University 9",
    "Partner University 10",
];

pub const TESTIMONIALS: [&str; 5] = [
    "Admitted to a Russell Group university",
    "Visa approved on the first attempt",
    "Scholarship secured for a master's programme",
    "Smooth move to Toronto",
    "Landed a research placement in Berlin",
];
