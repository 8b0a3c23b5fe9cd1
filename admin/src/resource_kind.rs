use clap::ValueEnum;

/// Backend nouns reachable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    AssignedCourses,
    Courses,
    Majors,
    MeetingTimes,
    MenuOptions,
    PrefixKeywords,
    Roles,
    Sections,
    SemesterPlans,
    Terms,
    UniversityCourses,
    UserSections,
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Create,
    Update,
    Delete,
}

impl ResourceKind {
    /// Collection path below the API base address
    pub fn root(self) -> &'static str {
        match self {
            ResourceKind::AssignedCourses => "assignedCourses",
            ResourceKind::Courses => "courses",
            ResourceKind::Majors => "majors",
            ResourceKind::MeetingTimes => "meetingTimes",
            ResourceKind::MenuOptions => "menuOptions",
            ResourceKind::PrefixKeywords => "prefixKeywords",
            ResourceKind::Roles => "roles",
            ResourceKind::Sections => "sections",
            ResourceKind::SemesterPlans => "semesterPlans",
            ResourceKind::Terms => "terms",
            ResourceKind::UniversityCourses => "universityCourses",
            ResourceKind::UserSections => "userSections",
            ResourceKind::Users => "users",
        }
    }

    pub fn supports(self, operation: Operation) -> bool {
        match (self, operation) {
            (ResourceKind::Users, Operation::Create | Operation::Delete) => false,
            (ResourceKind::UserSections, Operation::Get | Operation::Update) => false,
            _ => true,
        }
    }

    /// Whether the list endpoint takes query parameters
    pub fn filterable(self) -> bool {
        matches!(
            self,
            ResourceKind::AssignedCourses
                | ResourceKind::Courses
                | ResourceKind::MeetingTimes
                | ResourceKind::Sections
                | ResourceKind::SemesterPlans
        )
    }
}

/// Targets of the bulk CSV import
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImportKind {
    Sections,
    Users,
    UserSections,
    SemesterPlans,
    UniversityCourses,
    MeetingTimes,
}
