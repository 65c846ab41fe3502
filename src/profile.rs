/// Who the site is about. Used for page metadata and the hero banner.
pub struct SiteProfile {
    pub name: &'static str,
    pub site_title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub roles: &'static [&'static str],
    pub resume_path: &'static str,
    pub resume_file_name: &'static str,
    pub github: &'static str,
}

pub const PROFILE: SiteProfile = SiteProfile {
    name: "Sumit Singh",
    site_title: "Portfolio",
    description: "Portfolio showcasing projects, skills, and professional journey",
    keywords: &["Software Engineer", "MERN Stack Developer", "Next.js"],
    og_title: "Sumit Singh Portfolio",
    og_description: "Explore my professional projects and expertise",
    roles: &["Software Engineer", "MERN Stack Developer"],
    resume_path: "/Sumit_Singh_Resume.pdf",
    resume_file_name: "Sumit_Singh_Resume.pdf",
    github: "https://github.com/18-sumit",
};

impl SiteProfile {
    pub fn keywords_meta(&self) -> String {
        self.keywords.join(", ")
    }
}
