/// Built-in roster used on first run and by `roster reset`.
const DEFAULT_ROSTER: [&str; 40] = [
    "Aaliyah Brooks",
    "Adrian Walsh",
    "Amara Okafor",
    "Benjamin Hart",
    "Bianca Rossi",
    "Caleb Nguyen",
    "Camila Torres",
    "Daniel Kim",
    "Delia Moreno",
    "Elena Petrova",
    "Elias Fischer",
    "Fatima Haddad",
    "Felix Andersson",
    "Gabriel Silva",
    "Grace O'Connor",
    "Hannah Weiss",
    "Hugo Laurent",
    "Isaac Mensah",
    "Isabella Conti",
    "Jacob Miller",
    "Jasmine Patel",
    "Kai Nakamura",
    "Katherine Doyle",
    "Leah Cohen",
    "Liam Murphy",
    "Mateo Garcia",
    "Maya Sharma",
    "Nadia Rahman",
    "Noah Schmidt",
    "Olivia Bennett",
    "Omar Farouk",
    "Priya Iyer",
    "Quentin Dubois",
    "Rachel Adler",
    "Samuel Osei",
    "Sofia Lindqvist",
    "Thomas Byrne",
    "Valentina Ruiz",
    "William Chen",
    "Zoe Hamilton",
];

pub fn default_roster() -> &'static [&'static str] {
    &DEFAULT_ROSTER
}
