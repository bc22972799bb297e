//! The hardcoded content blocks every roadmap is assembled from.

use crate::models::{CareerPlan, Resource, Task, Week};

use super::{PhaseKind, ProjectBlock, WeekBlock};

/// Build the week content for a block identifier.
pub(crate) fn week(block: WeekBlock) -> Week {
    match block {
        WeekBlock::ProgrammingBasics => Week {
            focus: "Programming Basics".to_string(),
            tasks: vec![
                Task::with_resource(
                    "Learn Python fundamentals: variables, loops, functions",
                    "https://www.python.org/about/gettingstarted/",
                ),
                Task::new("Complete 20 easy problems on LeetCode/HackerRank"),
                Task::new("Set up VS Code, Git, and GitHub"),
                Task::new("Build: Simple CLI calculator with error handling"),
            ],
        },
        WeekBlock::DataStructures => Week {
            focus: "Data Structures".to_string(),
            tasks: vec![
                Task::with_resource(
                    "Study arrays, linked lists, stacks, queues",
                    "https://www.geeksforgeeks.org/data-structures/",
                ),
                Task::new("Implement each data structure from scratch"),
                Task::new("Solve 15 DSA problems"),
                Task::new("Build: Custom implementation of ArrayList/LinkedList"),
            ],
        },
        WeekBlock::AdvancedAlgorithms => Week {
            focus: "Advanced Algorithms".to_string(),
            tasks: vec![
                Task::new("Master sorting, searching, graph algorithms"),
                Task::new("Learn dynamic programming and greedy algorithms"),
                Task::new("Solve 30 medium-level problems"),
                Task::new("Study time/space complexity analysis"),
            ],
        },
        WeekBlock::MathForMl => Week {
            focus: "Math for ML".to_string(),
            tasks: vec![
                Task::with_resource(
                    "Linear algebra: vectors, matrices, eigenvalues",
                    "https://www.khanacademy.org/math/linear-algebra",
                ),
                Task::new("Calculus: derivatives, gradients, chain rule"),
                Task::new("Probability & statistics fundamentals"),
                Task::new("Practice with NumPy/Pandas"),
            ],
        },
        WeekBlock::SystemDesignBasics => Week {
            focus: "System Design Basics".to_string(),
            tasks: vec![
                Task::new("Learn REST API design principles"),
                Task::new("Study database fundamentals (SQL/NoSQL)"),
                Task::new("Build CRUD applications"),
                Task::new("Deploy app to cloud (Vercel/Heroku)"),
            ],
        },
        WeekBlock::WebDevelopment => Week {
            focus: "Web Development".to_string(),
            tasks: vec![
                Task::new("Master HTML, CSS, JavaScript ES6+"),
                Task::new("Learn React/Next.js fundamentals"),
                Task::new("Build responsive, accessible UI components"),
                Task::new("Deploy portfolio site"),
            ],
        },
        WeekBlock::DomainSpecialization => Week {
            focus: "Domain Specialization".to_string(),
            tasks: vec![
                Task::new("Start domain-specific coursework"),
                Task::new("Build 2-3 small projects in your domain"),
                Task::new("Read industry papers/documentation"),
                Task::new("Join domain-specific communities"),
            ],
        },
        WeekBlock::MlFundamentals => Week {
            focus: "Machine Learning Fundamentals".to_string(),
            tasks: vec![
                Task::with_resource(
                    "Complete ML course (Andrew Ng or fast.ai)",
                    "https://www.coursera.org/learn/machine-learning",
                ),
                Task::new(
                    "Implement algorithms: linear/logistic regression, SVM, decision trees",
                ),
                Task::new("Learn scikit-learn library thoroughly"),
                Task::new("Work on Kaggle beginner competitions"),
            ],
        },
        WeekBlock::AdvancedDevelopment => Week {
            focus: "Advanced Development".to_string(),
            tasks: vec![
                Task::new("Master advanced framework patterns"),
                Task::new("Learn testing (unit, integration, E2E)"),
                Task::new("Study CI/CD pipelines"),
                Task::new("Optimize app performance"),
            ],
        },
        WeekBlock::DeepLearning => Week {
            focus: "Deep Learning".to_string(),
            tasks: vec![
                Task::with_resource(
                    "Neural networks: CNNs, RNNs, Transformers",
                    "https://pytorch.org/tutorials/",
                ),
                Task::new("Master PyTorch or TensorFlow"),
                Task::new("Build image classifier, NLP model"),
                Task::new("Fine-tune pre-trained models"),
            ],
        },
        WeekBlock::RoboticsCore => Week {
            focus: "Robotics Core".to_string(),
            tasks: vec![
                Task::with_resource(
                    "Learn ROS (Robot Operating System)",
                    "https://www.ros.org/documentation/",
                ),
                Task::new("Study sensors, actuators, kinematics"),
                Task::new("Work with Arduino/Raspberry Pi"),
                Task::new("Simulate robots in Gazebo"),
            ],
        },
        WeekBlock::ProductionSystems => Week {
            focus: "Production Systems".to_string(),
            tasks: vec![
                Task::new("Learn Docker & Kubernetes basics"),
                Task::new("Implement caching strategies"),
                Task::new("Study microservices architecture"),
                Task::new("Monitor and debug production issues"),
            ],
        },
        WeekBlock::RealWorldProjects => Week {
            focus: "Real-World Projects".to_string(),
            tasks: vec![
                Task::new("Build 2 substantial portfolio projects"),
                Task::new("Contribute to open-source projects"),
                Task::new("Write technical blog posts"),
                Task::new("Present project to communities"),
            ],
        },
        WeekBlock::InterviewPreparation => Week {
            focus: "Interview Preparation".to_string(),
            tasks: vec![
                Task::new("Solve 100+ LeetCode problems (easy to hard)"),
                Task::with_resource(
                    "Practice system design interviews",
                    "https://www.youtube.com/c/SystemDesignInterview",
                ),
                Task::new("Mock interviews on Pramp/Interviewing.io"),
                Task::new("Study behavioral interview questions"),
            ],
        },
        WeekBlock::PortfolioBrand => Week {
            focus: "Portfolio & Personal Brand".to_string(),
            tasks: vec![
                Task::new("Polish GitHub: READMEs, documentation, demos"),
                Task::new("Create personal website/portfolio"),
                Task::new("Write 3-5 technical blog posts"),
                Task::new("Build active presence on X/LinkedIn"),
            ],
        },
        WeekBlock::JobSearchNetworking => Week {
            focus: "Job Search & Networking".to_string(),
            tasks: vec![
                Task::new("Apply to 50+ positions"),
                Task::new("Network at meetups/conferences"),
                Task::new("Reach out to engineers for coffee chats"),
                Task::new("Consider internships and contract work"),
            ],
        },
    }
}

/// Milestone project text for a block identifier.
pub(crate) fn project(block: ProjectBlock) -> String {
    match block {
        ProjectBlock::TaskManager => {
            "Build a text-based task manager with file persistence (save/load tasks)"
        }
        ProjectBlock::FullStackTodo => {
            "Full-stack web app: Todo app with auth, database, and deployment"
        }
        ProjectBlock::AlgorithmVisualizer => {
            "Algorithm visualizer web app showing sorting/graph algorithms in action"
        }
        ProjectBlock::MlDeployment => {
            "End-to-end ML project: Custom model trained on real data, deployed as web API"
        }
        ProjectBlock::AutonomousRobot => {
            "Autonomous robot: Navigation, obstacle avoidance, ROS integration"
        }
        ProjectBlock::ProductionApp => {
            "Production-grade application with authentication, payments, analytics, monitoring"
        }
        ProjectBlock::Capstone => {
            "Capstone project showcasing end-to-end skills: complex problem, clean code, \
             deployment, documentation"
        }
    }
    .to_string()
}

/// Recommended resources for a phase. Fixed; never profile-dependent.
pub(crate) fn resources(phase: PhaseKind) -> Vec<Resource> {
    match phase {
        PhaseKind::Foundation => vec![
            Resource::new("Python for Everybody", "Course", "https://www.py4e.com/"),
            Resource::new(
                "Git & GitHub Crash Course",
                "Video",
                "https://www.youtube.com/watch?v=RGOj5yH7evk",
            ),
            Resource::new(
                "The Algorithm Design Manual",
                "Book",
                "https://www.algorist.com/",
            ),
            Resource::new(
                "LeetCode Study Plans",
                "Practice",
                "https://leetcode.com/studyplan/",
            ),
        ],
        PhaseKind::CoreSkills => vec![
            Resource::new("Neetcode 150", "Practice", "https://neetcode.io/"),
            Resource::new(
                "System Design Primer",
                "Guide",
                "https://github.com/donnemartin/system-design-primer",
            ),
            Resource::new("Mathematics for ML", "Book", "https://mml-book.github.io/"),
            Resource::new("Full Stack Open", "Course", "https://fullstackopen.com/"),
        ],
        PhaseKind::Specialization => vec![
            Resource::new("Fast.ai Practical DL", "Course", "https://www.fast.ai/"),
            Resource::new("PyTorch Tutorials", "Docs", "https://pytorch.org/tutorials/"),
            Resource::new("ROS Tutorials", "Docs", "https://wiki.ros.org/ROS/Tutorials"),
            Resource::new("AWS/GCP Free Tier", "Platform", "https://aws.amazon.com/free/"),
        ],
        PhaseKind::Mastery => vec![
            Resource::new(
                "Blind 75 Problems",
                "List",
                "https://leetcode.com/discuss/general-discussion/460599/blind-75-leetcode-questions",
            ),
            Resource::new(
                "Grokking System Design",
                "Course",
                "https://www.designgurus.io/course/grokking-the-system-design-interview",
            ),
            Resource::new("Pramp (Mock Interviews)", "Platform", "https://www.pramp.com/"),
            Resource::new("Hired/Wellfound", "Job Board", "https://wellfound.com/"),
        ],
    }
}

/// The static career enablement plan rendered after the phases.
pub fn career_plan() -> CareerPlan {
    CareerPlan {
        portfolio: vec![
            "Create standout GitHub profile".to_string(),
            "Document 5+ production-quality projects".to_string(),
            "Write technical blog posts".to_string(),
            "Contribute to open source".to_string(),
        ],
        certifications: vec![
            "AWS/Azure Cloud Practitioner".to_string(),
            "TensorFlow Developer Certificate".to_string(),
            "ROS Industrial Training".to_string(),
            "Meta Frontend Developer".to_string(),
        ],
        job_search: vec![
            "Optimize LinkedIn profile".to_string(),
            "Network on X/Twitter".to_string(),
            "Apply to internships".to_string(),
            "Join tech communities".to_string(),
        ],
    }
}

/// The static next-actions list closing out a rendered roadmap.
pub fn next_actions() -> &'static [&'static str] {
    &[
        "Review Week 1 tasks in the Foundation Phase",
        "Set up your development environment",
        "Create a GitHub account and portfolio repository",
        "Join relevant Discord/Slack communities",
        "Block dedicated learning time on your calendar",
    ]
}
