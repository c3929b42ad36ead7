//! Sample project data shown by the dashboard views.
//!
//! Read-only. Views hold their own copies if they want to edit.

/// A team member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
    pub role: String,
}

impl Member {
    fn new(id: &str, name: &str, role: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar_url: avatar_url(id),
            role: role.to_string(),
        }
    }

    /// First letter of the name, shown when the avatar is missing.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

fn avatar_url(id: &str) -> String {
    format!("https://i.pravatar.cc/150?u={}", id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Document,
    Link,
}

/// A file or link attached to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub kind: AssetKind,
    pub url: String,
    /// ISO date (`YYYY-MM-DD`)
    pub uploaded_at: String,
    /// Search hint for placeholder images
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl MilestoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::NotStarted => "Not Started",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub status: MilestoneStatus,
    /// Percent complete, 0..=100
    pub progress: u8,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Percent complete, 0..=100
    pub progress: u8,
    pub team: Vec<Member>,
    pub milestones: Vec<Milestone>,
    pub assets: Vec<Asset>,
}

impl Project {
    /// Milestones that are not completed yet.
    pub fn active_milestones(&self) -> impl Iterator<Item = &Milestone> + '_ {
        self.milestones
            .iter()
            .filter(|m| m.status != MilestoneStatus::Completed)
    }

    pub fn finished_milestones(&self) -> impl Iterator<Item = &Milestone> + '_ {
        self.milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Completed)
    }
}

/// All members and projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    members: Vec<Member>,
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(members: Vec<Member>, projects: Vec<Project>) -> Self {
        Self { members, projects }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up a project. A missing id yields `None`.
    pub fn project_by_id(&self, id: Option<&str>) -> Option<&Project> {
        let id = id?;
        self.projects.iter().find(|p| p.id == id)
    }

    /// The dashboard's built-in sample data.
    pub fn sample() -> Self {
        let members = vec![
            Member::new("user-1", "Ava Garcia", "Project Manager"),
            Member::new("user-2", "Liam Rodriguez", "Lead Developer"),
            Member::new("user-3", "Sophia Martinez", "UX/UI Designer"),
            Member::new("user-4", "Noah Hernandez", "Frontend Developer"),
            Member::new("user-5", "Isabella Lopez", "Backend Developer"),
            Member::new("user-6", "Mason Gonzalez", "QA Tester"),
        ];
        let team = |indices: &[usize]| -> Vec<Member> {
            indices.iter().map(|&i| members[i].clone()).collect()
        };

        let projects = vec![
            Project {
                id: "proj-1".to_string(),
                name: "Apollo Web App".to_string(),
                description: "A complete redesign and rebuild of the main marketing website."
                    .to_string(),
                progress: 75,
                team: team(&[0, 1, 2, 3]),
                milestones: vec![
                    milestone("m1-1", "Discovery & Research", MilestoneStatus::Completed, 100,
                        Some("Finalized user personas and journey maps.")),
                    milestone("m1-2", "UI/UX Design Phase", MilestoneStatus::InProgress, 60, None),
                    milestone("m1-3", "Frontend Development", MilestoneStatus::NotStarted, 0, None),
                    milestone("m1-4", "Backend Integration", MilestoneStatus::NotStarted, 0, None),
                ],
                assets: vec![
                    asset("a1-1", "Final_Wireframes.fig", AssetKind::Link, "#", "2024-08-15", None),
                    asset("a1-2", "Project_Brief_v2.pdf", AssetKind::Document, "#", "2024-07-30", None),
                    asset("a1-3", "User_Research_Summary.docx", AssetKind::Document, "#", "2024-08-10", None),
                ],
            },
            Project {
                id: "proj-2".to_string(),
                name: "Orion Mobile App".to_string(),
                description: "New native mobile application for iOS and Android.".to_string(),
                progress: 40,
                team: team(&[0, 4, 5]),
                milestones: vec![
                    milestone("m2-1", "Initial Prototyping", MilestoneStatus::Completed, 100,
                        Some("User testing of prototype was successful.")),
                    milestone("m2-2", "Core Feature Development", MilestoneStatus::InProgress, 30, None),
                    milestone("m2-3", "Beta Testing", MilestoneStatus::NotStarted, 0, None),
                ],
                assets: vec![
                    asset("a2-1", "API_Documentation.pdf", AssetKind::Document, "#", "2024-08-25", None),
                    asset("a2-2", "App_Icon_Concepts.png", AssetKind::Image,
                        "https://placehold.co/400x300.png", "2024-09-05", Some("abstract concept")),
                ],
            },
            Project {
                id: "proj-3".to_string(),
                name: "Nova Analytics Dashboard".to_string(),
                description: "Internal dashboard for visualizing key business metrics.".to_string(),
                progress: 90,
                team: team(&[1, 3, 4]),
                milestones: vec![
                    milestone("m3-1", "Data Source Integration", MilestoneStatus::Completed, 100,
                        Some("All data sources are connected and stable.")),
                    milestone("m3-2", "Chart Component Library", MilestoneStatus::Completed, 100,
                        Some("Built with Recharts for maximum flexibility.")),
                    milestone("m3-3", "User Role & Permissions", MilestoneStatus::InProgress, 70, None),
                ],
                assets: vec![
                    asset("a3-1", "Dashboard_Mockups.png", AssetKind::Image,
                        "https://placehold.co/600x400.png", "2024-08-18", Some("dashboard analytics")),
                ],
            },
        ];

        Self::new(members, projects)
    }
}

fn milestone(
    id: &str,
    title: &str,
    status: MilestoneStatus,
    progress: u8,
    notes: Option<&str>,
) -> Milestone {
    Milestone {
        id: id.to_string(),
        title: title.to_string(),
        status,
        progress,
        notes: notes.map(str::to_string),
    }
}

fn asset(
    id: &str,
    name: &str,
    kind: AssetKind,
    url: &str,
    uploaded_at: &str,
    hint: Option<&str>,
) -> Asset {
    Asset {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        url: url.to_string(),
        uploaded_at: uploaded_at.to_string(),
        hint: hint.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.members().len(), 6);
        assert_eq!(catalog.projects().len(), 3);
        assert_eq!(
            catalog.members()[0].avatar_url,
            "https://i.pravatar.cc/150?u=user-1"
        );
    }

    #[test]
    fn test_project_by_id() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.project_by_id(Some("proj-2")).unwrap().name,
            "Orion Mobile App"
        );
        assert!(catalog.project_by_id(Some("proj-9")).is_none());
        assert!(catalog.project_by_id(None).is_none());
    }

    #[test]
    fn test_milestone_partition() {
        let catalog = Catalog::sample();
        let nova = catalog.project_by_id(Some("proj-3")).unwrap();
        let active: Vec<_> = nova.active_milestones().map(|m| m.id.as_str()).collect();
        let finished: Vec<_> = nova.finished_milestones().map(|m| m.id.as_str()).collect();
        assert_eq!(active, ["m3-3"]);
        assert_eq!(finished, ["m3-1", "m3-2"]);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(MilestoneStatus::InProgress.label(), "In Progress");
        assert_eq!(MilestoneStatus::NotStarted.label(), "Not Started");
    }

    #[test]
    fn test_member_initial() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.members()[2].initial(), Some('S'));
    }
}
