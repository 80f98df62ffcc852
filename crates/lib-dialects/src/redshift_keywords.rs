//! Keyword tables for Amazon Redshift where they differ from PostgreSQL.

pub(crate) const REDSHIFT_RESERVED_TOP_LEVEL_KEYWORDS: &str = "ADD
AFTER
ALTER COLUMN
ALTER TABLE
COPY
DELETE FROM
EXCEPT
FROM
GROUP BY
HAVING
INSERT INTO
INSERT
LIMIT
ORDER BY
SELECT
SET
UNLOAD
UPDATE
VALUES
VACUUM
WHERE
";

pub(crate) const REDSHIFT_RESERVED_KEYWORDS: &str = "ALL
ANALYZE
ANY
AS
ASC
AUTO
BACKUP
BETWEEN
BOTH
BY
CASCADE
CAST
CHECK
COLLATE
COLUMN
COMPOUND
COMPROWS
CONSTRAINT
CREATE
CREDENTIALS
CURRENT_DATE
CURRENT_TIME
CURRENT_TIMESTAMP
CURRENT_USER
DEFAULT
DELIMITER
DESC
DISTINCT
DISTKEY
DISTSTYLE
DROP
ENCODE
ESCAPE
EXISTS
EXPLAIN
FALSE
FOR
FOREIGN KEY
GRANT
GROUP
GZIP
IAM_ROLE
IDENTITY
ILIKE
IN
INTERLEAVED
INTERVAL
INTO
IS
LEADING
LEFT
LIKE
MANIFEST
NOT
NULL
NULLS FIRST
NULLS LAST
OFFSET
ON
ONLY
ORDER
OUTER
OVER
PARTITION BY
PRIMARY KEY
REFERENCES
REGION
RESTRICT
RIGHT
ROLLBACK
ROW
ROWS
SORTKEY
TABLE
TEMPORARY
THEN
TO
TRAILING
TRUE
UNIQUE
USING
VIEW
WITH
";
