use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::ExternalUid)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PhotoUrl).string().null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师申请表
        manager
            .create_table(
                Table::create()
                    .table(TeacherRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherRequests::InstructorEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeacherRequests::Category).string().null())
                    .col(ColumnDef::new(TeacherRequests::Experience).string().null())
                    .col(ColumnDef::new(TeacherRequests::Details).text().null())
                    .col(ColumnDef::new(TeacherRequests::Status).string().not_null())
                    .col(
                        ColumnDef::new(TeacherRequests::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表（含派生计数器，由业务层维护）
        manager
            .create_table(
                Table::create()
                    .table(ClassOfferings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassOfferings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassOfferings::InstructorEmail)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassOfferings::InstructorName)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(ClassOfferings::Title).string().not_null())
                    .col(ColumnDef::new(ClassOfferings::Price).double().not_null())
                    .col(ColumnDef::new(ClassOfferings::Description).text().null())
                    .col(ColumnDef::new(ClassOfferings::Image).string().null())
                    .col(ColumnDef::new(ClassOfferings::Status).string().not_null())
                    .col(
                        ColumnDef::new(ClassOfferings::TotalEnrollment)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ClassOfferings::TotalAssignments)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ClassOfferings::TotalSubmissions)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ClassOfferings::AverageRating).double().null())
                    .col(
                        ColumnDef::new(ClassOfferings::TotalReviews)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ClassOfferings::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课表
        // 注意：子表不声明外键约束，引用动作（级联、计数）由业务层负责
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollments::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Enrollments::UserId).string().not_null())
                    .col(ColumnDef::new(Enrollments::Progress).double().not_null())
                    .col(ColumnDef::new(Enrollments::Completed).boolean().not_null())
                    .col(
                        ColumnDef::new(Enrollments::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一用户对同一课程至多一条选课记录
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_class_user")
                    .table(Enrollments::Table)
                    .col(Enrollments::ClassId)
                    .col(Enrollments::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_user")
                    .table(Enrollments::Table)
                    .col(Enrollments::UserId)
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().null())
                    .col(ColumnDef::new(Assignments::Deadline).big_integer().null())
                    .col(ColumnDef::new(Assignments::MaxPoints).double().not_null())
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::UpdatedAt).big_integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_class")
                    .table(Assignments::Table)
                    .col(Assignments::ClassId)
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::UserId).string().not_null())
                    .col(
                        ColumnDef::new(Submissions::SubmissionText)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::SubmissionUrl).text().not_null())
                    .col(ColumnDef::new(Submissions::Status).string().not_null())
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::Grade).double().null())
                    .col(ColumnDef::new(Submissions::Feedback).text().null())
                    .col(ColumnDef::new(Submissions::GradedAt).big_integer().null())
                    .to_owned(),
            )
            .await?;

        // 同一用户对同一作业至多一条提交记录，二次提交为原地更新
        manager
            .create_index(
                Index::create()
                    .name("idx_submissions_assignment_user")
                    .table(Submissions::Table)
                    .col(Submissions::AssignmentId)
                    .col(Submissions::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submissions_user")
                    .table(Submissions::Table)
                    .col(Submissions::UserId)
                    .to_owned(),
            )
            .await?;

        // 创建课程评价表
        manager
            .create_table(
                Table::create()
                    .table(Evaluations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Evaluations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Evaluations::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Evaluations::UserId).string().not_null())
                    .col(ColumnDef::new(Evaluations::Name).string().null())
                    .col(ColumnDef::new(Evaluations::PhotoUrl).string().null())
                    .col(ColumnDef::new(Evaluations::Rating).double().not_null())
                    .col(ColumnDef::new(Evaluations::Description).text().null())
                    .col(
                        ColumnDef::new(Evaluations::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一用户对同一课程至多一条评价
        manager
            .create_index(
                Index::create()
                    .name("idx_evaluations_class_user")
                    .table(Evaluations::Table)
                    .col(Evaluations::ClassId)
                    .col(Evaluations::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建课程资料表
        manager
            .create_table(
                Table::create()
                    .table(Resources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resources::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Resources::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Resources::Title).string().not_null())
                    .col(ColumnDef::new(Resources::Description).text().not_null())
                    .col(ColumnDef::new(Resources::ResourceType).string().not_null())
                    .col(ColumnDef::new(Resources::Url).string().not_null())
                    .col(ColumnDef::new(Resources::TeacherId).string().not_null())
                    .col(ColumnDef::new(Resources::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resources_class")
                    .table(Resources::Table)
                    .col(Resources::ClassId)
                    .to_owned(),
            )
            .await?;

        // 创建支付记录表（仅追加的事实记录）
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Payments::UserId).string().not_null())
                    .col(ColumnDef::new(Payments::Amount).double().not_null())
                    .col(ColumnDef::new(Payments::Status).string().not_null())
                    .col(ColumnDef::new(Payments::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Resources::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Evaluations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassOfferings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    ExternalUid,
    Name,
    Email,
    PhotoUrl,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TeacherRequests {
    Table,
    Id,
    InstructorEmail,
    Category,
    Experience,
    Details,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClassOfferings {
    Table,
    Id,
    InstructorEmail,
    InstructorName,
    Title,
    Price,
    Description,
    Image,
    Status,
    TotalEnrollment,
    TotalAssignments,
    TotalSubmissions,
    AverageRating,
    TotalReviews,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    Table,
    Id,
    ClassId,
    UserId,
    Progress,
    Completed,
    EnrolledAt,
}

#[derive(DeriveIden)]
enum Assignments {
    Table,
    Id,
    ClassId,
    Title,
    Description,
    Deadline,
    MaxPoints,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Submissions {
    Table,
    Id,
    AssignmentId,
    UserId,
    SubmissionText,
    SubmissionUrl,
    Status,
    SubmittedAt,
    Grade,
    Feedback,
    GradedAt,
}

#[derive(DeriveIden)]
enum Evaluations {
    Table,
    Id,
    ClassId,
    UserId,
    Name,
    PhotoUrl,
    Rating,
    Description,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum Resources {
    Table,
    Id,
    ClassId,
    Title,
    Description,
    ResourceType,
    Url,
    TeacherId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    ClassId,
    UserId,
    Amount,
    Status,
    CreatedAt,
}
